//! Proof-of-work targets
//!
//! Conversion between 256-bit targets and the compact `bits` encoding, and the
//! `~0 >> n` construction used to declare per-network difficulty ceilings.

use serde::{Serialize, Serializer};
use std::fmt;

/// 256-bit unsigned target, big-endian so that byte order matches numeric order
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Target(pub [u8; 32]);

impl Target {
    pub const fn zero() -> Self {
        Target([0u8; 32])
    }

    /// All bits set, shifted right by `shift` (the classic `~uint256(0) >> n`)
    pub fn max_shifted_right(shift: u32) -> Self {
        let mut target = [0u8; 32];
        for (i, byte) in target.iter_mut().enumerate() {
            let bit_start = (i as u32) * 8;
            *byte = if bit_start + 8 <= shift {
                0x00
            } else if bit_start >= shift {
                0xff
            } else {
                0xff >> (shift - bit_start)
            };
        }
        Target(target)
    }

    /// Decode compact `bits`; `None` for negative or overflowing encodings
    pub fn from_compact(compact: u32) -> Option<Self> {
        let exponent = (compact >> 24) as usize;
        let mantissa = compact & 0x007F_FFFF;
        let negative = compact & 0x0080_0000 != 0;

        if mantissa == 0 {
            return Some(Target::zero());
        }
        if negative || exponent > 32 {
            return None;
        }

        let mut target = [0u8; 32];
        if exponent <= 3 {
            let value = mantissa >> (8 * (3 - exponent));
            target[29] = ((value >> 16) & 0xFF) as u8;
            target[30] = ((value >> 8) & 0xFF) as u8;
            target[31] = (value & 0xFF) as u8;
        } else {
            let start = 32 - exponent;
            target[start] = ((mantissa >> 16) & 0xFF) as u8;
            if start + 1 < 32 {
                target[start + 1] = ((mantissa >> 8) & 0xFF) as u8;
            }
            if start + 2 < 32 {
                target[start + 2] = (mantissa & 0xFF) as u8;
            }
        }

        Some(Target(target))
    }

    /// Encode as compact `bits`
    pub fn to_compact(&self) -> u32 {
        let Some(first_nonzero) = self.0.iter().position(|&b| b != 0) else {
            return 0;
        };

        let mut exponent = (32 - first_nonzero) as u32;
        let byte_at = |i: usize| self.0.get(i).copied().unwrap_or(0) as u32;
        let mut mantissa = (byte_at(first_nonzero) << 16)
            | (byte_at(first_nonzero + 1) << 8)
            | byte_at(first_nonzero + 2);

        // The sign bit must stay clear
        if mantissa & 0x0080_0000 != 0 {
            mantissa >>= 8;
            exponent += 1;
        }

        (exponent << 24) | mantissa
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Target({})", self.to_hex())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Target {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Check that compact `bits` decode to a target no easier than `limit`
pub fn bits_within_limit(bits: u32, limit: &Target) -> bool {
    match Target::from_compact(bits) {
        Some(target) => target != Target::zero() && target <= *limit,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_shifted_right() {
        let limit = Target::max_shifted_right(20);
        assert_eq!(&limit.0[..3], &[0x00, 0x00, 0x0f]);
        assert!(limit.0[3..].iter().all(|&b| b == 0xff));

        let regtest = Target::max_shifted_right(1);
        assert_eq!(regtest.0[0], 0x7f);
        assert_eq!(Target::max_shifted_right(0).0, [0xff; 32]);
        assert_eq!(Target::max_shifted_right(256), Target::zero());
    }

    #[test]
    fn test_compact_roundtrip_of_limits() {
        assert_eq!(Target::max_shifted_right(20).to_compact(), 0x1e0fffff);
        assert_eq!(Target::max_shifted_right(1).to_compact(), 0x207fffff);
    }

    #[test]
    fn test_from_compact_genesis_bits() {
        let target = Target::from_compact(0x1e0ffff0).unwrap();
        assert_eq!(&target.0[..5], &[0x00, 0x00, 0x0f, 0xff, 0xf0]);
        assert!(target.0[5..].iter().all(|&b| b == 0));
        assert_eq!(target.to_compact(), 0x1e0ffff0);
    }

    #[test]
    fn test_from_compact_small_exponent() {
        let target = Target::from_compact(0x02123456).unwrap();
        assert_eq!(&target.0[29..], &[0x00, 0x12, 0x34]);
    }

    #[test]
    fn test_rejects_negative_and_overflow() {
        assert!(Target::from_compact(0x04923456).is_none());
        assert!(Target::from_compact(0xff123456).is_none());
    }

    #[test]
    fn test_sign_bit_moves_into_exponent() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0x80;
        assert_eq!(Target(bytes).to_compact(), 0x02008000);
    }

    #[test]
    fn test_bits_within_limit() {
        let limit = Target::max_shifted_right(20);
        assert!(bits_within_limit(0x1e0ffff0, &limit));
        assert!(!bits_within_limit(0x1f00ffff, &limit));
        assert!(!bits_within_limit(0, &limit));
    }
}
