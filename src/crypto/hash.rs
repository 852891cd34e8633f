//! Block and transaction hashing
//!
//! Transaction ids and merkle nodes use SHA-256 applied twice. Block headers
//! are identified by Quark, a chain of nine 512-bit rounds.
//! Hashes are stored in internal (serialization) byte order and displayed
//! byte-reversed, which is the order block explorers and checkpoint tables use.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use sha3::Keccak512;
use std::fmt;

use super::bmw::bmw512;

/// 32-byte hash output, internal byte order
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// Create a zero hash (used for genesis previous hash)
    pub const fn zero() -> Self {
        Hash([0u8; 32])
    }

    /// Create hash from bytes in internal order
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    /// Parse a display-order hex string, with or without a `0x` prefix
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        arr.reverse();
        Ok(Hash(arr))
    }

    /// Display-order hex string
    pub fn to_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }

    /// Get as bytes (internal order)
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::zero()
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex: String = Deserialize::deserialize(deserializer)?;
        Hash::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

/// Single SHA-256 of arbitrary bytes
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 applied twice
pub fn double_sha256(data: &[u8]) -> Hash {
    Hash(sha256(&sha256(data)))
}

/// Hash two hashes together (for Merkle tree)
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut data = Vec::with_capacity(64);
    data.extend_from_slice(&left.0);
    data.extend_from_slice(&right.0);
    double_sha256(&data)
}

type Hash512 = [u8; 64];

fn digest512<D: Digest>(data: &[u8]) -> Hash512 {
    let mut out = [0u8; 64];
    out.copy_from_slice(&D::digest(data));
    out
}

// blake-hash implements the older digest trait
fn blake512(data: &[u8]) -> Hash512 {
    let mut out = [0u8; 64];
    out.copy_from_slice(&<blake_hash::Blake512 as blake_hash::Digest>::digest(data));
    out
}

fn groestl512(data: &[u8]) -> Hash512 {
    digest512::<groestl::Groestl512>(data)
}

fn jh512(data: &[u8]) -> Hash512 {
    digest512::<jh::Jh512>(data)
}

fn keccak512(data: &[u8]) -> Hash512 {
    digest512::<Keccak512>(data)
}

fn skein512(data: &[u8]) -> Hash512 {
    digest512::<skein::Skein512<skein::digest::consts::U64>>(data)
}

/// Bit 3 of the first byte picks the branch in the three conditional rounds
fn takes_first_branch(hash: &Hash512) -> bool {
    hash[0] & 8 != 0
}

/// Quark block hash
///
/// BLAKE, BMW, then Groestl or Skein, Groestl, JH, then BLAKE or BMW, Keccak,
/// Skein, then Keccak or JH. Every round is 512-bit; the result keeps the
/// first 32 bytes.
pub fn quark_hash(data: &[u8]) -> Hash {
    let mut h = blake512(data);
    h = bmw512(&h);
    h = if takes_first_branch(&h) {
        groestl512(&h)
    } else {
        skein512(&h)
    };
    h = groestl512(&h);
    h = jh512(&h);
    h = if takes_first_branch(&h) {
        blake512(&h)
    } else {
        bmw512(&h)
    };
    h = keccak512(&h);
    h = skein512(&h);
    h = if takes_first_branch(&h) {
        keccak512(&h)
    } else {
        jh512(&h)
    };

    let mut out = [0u8; 32];
    out.copy_from_slice(&h[..32]);
    Hash(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_sha256_empty() {
        let hash = double_sha256(b"");
        assert_eq!(
            hex::encode(hash.0),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
        assert_eq!(
            hash.to_hex(),
            "56944c5d3f98413ef45cf54545538103cc9f298e0575820ad3591376e2e0f65d"
        );
    }

    #[test]
    fn test_double_sha256_known_vector() {
        assert_eq!(
            hex::encode(double_sha256(b"hello").0),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn test_round_primitives_match_reference_vectors() {
        assert_eq!(
            hex::encode(blake512(b"")),
            "a8cfbbd73726062df0c6864dda65defe58ef0cc52a5625090fa17601e1eecd1b\
             628e94f396ae402a00acc9eab77b4d4c2e852aaaa25a636d80af3fc7913ef5b8"
        );
        assert_eq!(
            hex::encode(groestl512(b"")),
            "6d3ad29d279110eef3adbd66de2a0345a77baede1557f5d099fce0c03d6dc2ba\
             8e6d4a6633dfbd66053c20faa87d1a11f39a7fbe4a6c2f009801370308fc4ad8"
        );
        assert_eq!(
            hex::encode(keccak512(b"")),
            "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304\
             c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"
        );
        assert_eq!(
            hex::encode(skein512(b"")),
            "bc5b4c50925519c290cc634277ae3d6257212395cba733bbad37a4af0fa06af4\
             1fca7903d06564fea7a2d3730dbdb80c1f85562dfcc070334ea4d1d9e72cba7a"
        );
    }

    #[test]
    fn test_quark_genesis_header() {
        let header = hex::decode(
            "01000000000000000000000000000000000000000000000000000000000000000000000\
             02c01debaafa77f9e8cb4e70c57a257500df7c453b681c3479548f980de7ec589b666215d\
             f0ff0f1e06f50900",
        )
        .unwrap();
        assert_eq!(header.len(), 80);
        assert_eq!(
            quark_hash(&header).to_hex(),
            "8ab5bd3c2a0bd5f1755587c725b1cee1fbe9d48101993818b29519c374087052"
        );
    }

    #[test]
    fn test_quark_differs_from_double_sha256() {
        assert_eq!(
            hex::encode(quark_hash(b"").0),
            "0800f13b5af35b8363864de22b7bedeca369e2a7c6c77b4f69441cb03a517d9c"
        );
        assert_ne!(quark_hash(b""), double_sha256(b""));
    }

    #[test]
    fn test_zero_hash() {
        let zero = Hash::zero();
        assert_eq!(zero.0, [0u8; 32]);
        assert!(zero.is_zero());
    }

    #[test]
    fn test_from_hex_reverses_byte_order() {
        let hash = Hash::from_hex(
            "0x0000000000000000000000000000000000000000000000000000000000000001",
        )
        .unwrap();
        assert_eq!(hash.0[0], 1);
        assert_eq!(hash.0[31], 0);
    }

    #[test]
    fn test_hex_roundtrip() {
        let hash = double_sha256(b"test");
        let recovered = Hash::from_hex(&hash.to_hex()).unwrap();
        assert_eq!(hash, recovered);
    }

    #[test]
    fn test_from_hex_rejects_short_input() {
        assert!(Hash::from_hex("abcd").is_err());
    }

    #[test]
    fn test_hash_pair_order_matters() {
        let left = double_sha256(b"left");
        let right = double_sha256(b"right");
        assert_eq!(hash_pair(&left, &right), hash_pair(&left, &right));
        assert_ne!(hash_pair(&left, &right), hash_pair(&right, &left));
    }

    #[test]
    fn test_serializes_as_display_hex() {
        let hash = double_sha256(b"");
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", hash.to_hex()));
    }
}
