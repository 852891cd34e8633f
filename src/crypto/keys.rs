//! secp256k1 public keys used for spork message signing
//!
//! Spork keys are distributed as hex-encoded SEC1 points, compressed or not.

use k256::PublicKey;
use thiserror::Error;

/// Key parsing errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KeyError {
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Not a valid secp256k1 point")]
    InvalidPoint,
}

/// A validated secp256k1 public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SporkPublicKey(PublicKey);

impl SporkPublicKey {
    /// Parse a hex-encoded SEC1 public key
    pub fn from_hex(hex: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex)?;
        let key = PublicKey::from_sec1_bytes(&bytes).map_err(|_| KeyError::InvalidPoint)?;
        Ok(Self(key))
    }

    /// The underlying curve point
    pub fn inner(&self) -> &PublicKey {
        &self.0
    }

    /// SEC1 encoding, compressed or uncompressed
    pub fn to_sec1_bytes(&self, compressed: bool) -> Vec<u8> {
        use k256::elliptic_curve::sec1::ToEncodedPoint;
        self.0.to_encoded_point(compressed).as_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPRESSED: &str = "024e5c4ba539033389b20d7ae149d8b98338cc90b6db94b1fb79bf87ee99902721";

    #[test]
    fn test_parse_compressed_key() {
        let key = SporkPublicKey::from_hex(COMPRESSED).unwrap();
        assert_eq!(hex::encode(key.to_sec1_bytes(true)), COMPRESSED);
        assert_eq!(key.to_sec1_bytes(false).len(), 65);
    }

    #[test]
    fn test_rejects_bad_hex() {
        assert!(matches!(
            SporkPublicKey::from_hex("zz"),
            Err(KeyError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_rejects_off_curve_point() {
        let mut bad = String::from("02");
        bad.push_str(&"00".repeat(32));
        assert_eq!(SporkPublicKey::from_hex(&bad), Err(KeyError::InvalidPoint));
    }
}
