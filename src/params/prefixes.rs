//! Address and key encoding prefixes
//!
//! Base58check version bytes for addresses and keys, BIP32 extended key
//! versions and the BIP44 coin type.

use serde::Serialize;
use thiserror::Error;

/// Kinds of base58-encoded data a network assigns a prefix to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    ExtCoinType,
}

/// Per-network prefix table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    pub pubkey_address: [u8; 1],
    pub script_address: [u8; 1],
    pub secret_key: [u8; 1],
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
    /// BIP44 coin type, hardened
    pub ext_coin_type: [u8; 4],
}

/// Address decoding errors
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("Invalid base58check encoding: {0}")]
    Base58(#[from] bs58::decode::Error),
    #[error("Prefix mismatch for {kind:?}: expected {expected}, found {found}")]
    PrefixMismatch {
        kind: Base58Type,
        expected: String,
        found: String,
    },
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
            Base58Type::ExtCoinType => &self.ext_coin_type,
        }
    }

    /// BIP44 coin type index with the hardening bit cleared
    pub fn coin_type(&self) -> u32 {
        u32::from_be_bytes(self.ext_coin_type) & 0x7fff_ffff
    }

    /// Prefix `payload` and base58check-encode it
    pub fn encode(&self, kind: Base58Type, payload: &[u8]) -> String {
        let mut data = self.get(kind).to_vec();
        data.extend_from_slice(payload);
        bs58::encode(data).with_check().into_string()
    }

    /// Decode base58check text and strip the expected prefix
    pub fn decode(&self, kind: Base58Type, text: &str) -> Result<Vec<u8>, AddressError> {
        let data = bs58::decode(text).with_check(None).into_vec()?;
        let prefix = self.get(kind);
        if !data.starts_with(prefix) {
            let found = &data[..prefix.len().min(data.len())];
            return Err(AddressError::PrefixMismatch {
                kind,
                expected: hex::encode(prefix),
                found: hex::encode(found),
            });
        }
        Ok(data[prefix.len()..].to_vec())
    }
}
