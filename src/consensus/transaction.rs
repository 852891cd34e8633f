//! Transaction structure
//!
//! Only what is needed to serialize and identify a transaction; spending rules
//! and signature checks belong to the validation engine.

use serde::{Deserialize, Serialize};

use super::encode::{write_compact_size, write_var_bytes};
use super::Script;
use crate::crypto::{double_sha256, Hash};

/// Signed amount in base units
pub type Amount = i64;

/// Reference to a previous transaction output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    /// Hash of the transaction containing the output
    pub txid: Hash,
    /// Index of the output in that transaction
    pub index: u32,
}

impl OutPoint {
    /// The null outpoint spent by coinbase inputs
    pub const fn null() -> Self {
        Self {
            txid: Hash::zero(),
            index: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.index == u32::MAX
    }
}

/// A transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Amount in base units
    pub value: Amount,
    pub script_pubkey: Script,
}

/// A complete transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction version
    pub version: i32,
    /// Transaction inputs
    pub inputs: Vec<TxInput>,
    /// Transaction outputs
    pub outputs: Vec<TxOutput>,
    /// Lock time (block height or timestamp)
    pub lock_time: u32,
}

impl Transaction {
    /// Create a coinbase transaction with a single input and output
    pub fn coinbase(script_sig: Script, value: Amount, script_pubkey: Script) -> Self {
        Self {
            version: 1,
            inputs: vec![TxInput {
                prevout: OutPoint::null(),
                script_sig,
                sequence: u32::MAX,
            }],
            outputs: vec![TxOutput {
                value,
                script_pubkey,
            }],
            lock_time: 0,
        }
    }

    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }

    /// Transaction id
    pub fn hash(&self) -> Hash {
        double_sha256(&self.to_bytes())
    }

    /// Network serialization
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(&input.prevout.txid.0);
            bytes.extend_from_slice(&input.prevout.index.to_le_bytes());
            write_var_bytes(&mut bytes, input.script_sig.as_bytes());
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_var_bytes(&mut bytes, output.script_pubkey.as_bytes());
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());
        bytes
    }

    /// Calculate total output value
    pub fn total_output_value(&self) -> Amount {
        self.outputs.iter().map(|o| o.value).sum()
    }
}
