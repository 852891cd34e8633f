//! Profile construction and registry errors

use thiserror::Error;

use super::NetworkId;
use crate::consensus::CheckpointError;
use crate::crypto::{Hash, KeyError};

/// A declared network failed to build; always fatal
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    #[error("{network}: invalid hex in {field}: {source}")]
    InvalidHex {
        network: NetworkId,
        field: &'static str,
        source: hex::FromHexError,
    },
    #[error("{network}: genesis hash mismatch (expected {expected}, computed {actual})")]
    GenesisHashMismatch {
        network: NetworkId,
        expected: Hash,
        actual: Hash,
    },
    #[error("{network}: genesis merkle root mismatch (expected {expected}, computed {actual})")]
    GenesisMerkleRootMismatch {
        network: NetworkId,
        expected: Hash,
        actual: Hash,
    },
    #[error("{network}: genesis bits {bits:#010x} exceed the proof-of-work limit")]
    GenesisAbovePowLimit { network: NetworkId, bits: u32 },
    #[error("{network}: invalid checkpoint table: {source}")]
    Checkpoints {
        network: NetworkId,
        source: CheckpointError,
    },
    #[error("{network}: invalid {field}: {source}")]
    InvalidKey {
        network: NetworkId,
        field: &'static str,
        source: KeyError,
    },
    #[error("{network}: alert key must be 65 bytes, got {len}")]
    AlertKeyLength { network: NetworkId, len: usize },
}

/// Misuse of the process-wide selection
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    #[error("Network parameters requested before a network was selected")]
    NotSelected,
    #[error("Network {active} already selected, cannot switch to {requested}")]
    ConflictingSelection {
        active: NetworkId,
        requested: NetworkId,
    },
    #[error("Mutable parameters are only available on the unittest network (active: {active})")]
    NotUnitTest { active: NetworkId },
    #[error(transparent)]
    Profile(#[from] ProfileError),
}
