//! Block structure
//!
//! Defines the block and the 80-byte block header.

use serde::{Deserialize, Serialize};

use super::Transaction;
use crate::crypto::{compute_merkle_root, quark_hash, Hash};

/// Serialized header length
pub const HEADER_SIZE: usize = 80;

/// Block header containing all metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockHeader {
    /// Block version
    pub version: i32,
    /// Hash of the previous block
    pub prev_hash: Hash,
    /// Merkle root of all transactions
    pub merkle_root: Hash,
    /// Block timestamp (seconds since Unix epoch)
    pub timestamp: u32,
    /// Difficulty target (compact representation)
    pub bits: u32,
    /// Nonce used for PoW
    pub nonce: u32,
}

impl BlockHeader {
    /// Create a new block header
    pub fn new(
        version: i32,
        prev_hash: Hash,
        merkle_root: Hash,
        timestamp: u32,
        bits: u32,
        nonce: u32,
    ) -> Self {
        Self {
            version,
            prev_hash,
            merkle_root,
            timestamp,
            bits,
            nonce,
        }
    }

    /// Serialize the header for hashing
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.version.to_le_bytes());
        bytes[4..36].copy_from_slice(&self.prev_hash.0);
        bytes[36..68].copy_from_slice(&self.merkle_root.0);
        bytes[68..72].copy_from_slice(&self.timestamp.to_le_bytes());
        bytes[72..76].copy_from_slice(&self.bits.to_le_bytes());
        bytes[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    /// Quark hash of the serialized header
    pub fn hash(&self) -> Hash {
        quark_hash(&self.to_bytes())
    }
}

/// A complete block containing header and transactions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    /// Block header
    pub header: BlockHeader,
    /// List of transactions in this block
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Create a new block
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self {
            header,
            transactions,
        }
    }

    /// Get the block hash
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Merkle root recomputed from the transactions, ignoring the header field
    pub fn compute_merkle_root(&self) -> Hash {
        let tx_hashes: Vec<Hash> = self.transactions.iter().map(|tx| tx.hash()).collect();
        compute_merkle_root(&tx_hashes)
    }

    /// Check if this is the genesis block
    pub fn is_genesis(&self) -> bool {
        self.header.prev_hash == Hash::zero()
    }
}
