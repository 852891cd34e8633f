//! Genesis block construction and verification
//!
//! The genesis block is rebuilt from its declared inputs on every start and
//! compared against the hard-coded hash and merkle root. A mismatch means the
//! compiled parameters are corrupt and the node must not start.

use serde::Serialize;

use crate::consensus::{Amount, Block, BlockHeader, Script, Transaction};
use crate::crypto::Hash;

/// First push of the genesis coinbase script (the classic `0x1d00ffff` bits)
const GENESIS_SCRIPT_SIG_BITS: i64 = 486604799;

/// Extra nonce pushed after the bits
const GENESIS_EXTRA_NONCE: i64 = 4;

/// Declared inputs of a network's genesis block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenesisSpec {
    /// Timestamp message embedded in the coinbase input
    pub coinbase_message: &'static str,
    /// Coinbase output value
    pub reward: Amount,
    /// Hex public key paid by the coinbase output
    pub reward_pubkey: &'static str,
    pub timestamp: u32,
    pub bits: u32,
    /// Nonce found offline
    pub nonce: u32,
    pub version: i32,
    /// Display-order hex of the expected block hash
    pub expected_hash: &'static str,
    /// Display-order hex of the expected merkle root
    pub expected_merkle_root: &'static str,
}

impl GenesisSpec {
    /// Build the block described by this spec
    pub fn build(&self) -> Result<Block, hex::FromHexError> {
        let pubkey = hex::decode(self.reward_pubkey)?;
        Ok(build_genesis_block(
            self.coinbase_message.as_bytes(),
            self.reward,
            Script::pay_to_pubkey(&pubkey),
            self.timestamp,
            self.bits,
            self.nonce,
            self.version,
        ))
    }

    pub fn expected_hash(&self) -> Result<Hash, hex::FromHexError> {
        Hash::from_hex(self.expected_hash)
    }

    pub fn expected_merkle_root(&self) -> Result<Hash, hex::FromHexError> {
        Hash::from_hex(self.expected_merkle_root)
    }
}

/// Coinbase input script: `<bits> <extra nonce> <message>`
pub fn genesis_script_sig(coinbase_message: &[u8]) -> Script {
    Script::new()
        .push_int(GENESIS_SCRIPT_SIG_BITS)
        .push_script_num(GENESIS_EXTRA_NONCE)
        .push_slice(coinbase_message)
}

/// Create a genesis block
///
/// Deterministic: identical inputs always produce a byte-for-byte identical
/// block.
pub fn build_genesis_block(
    coinbase_message: &[u8],
    reward_value: Amount,
    reward_script: Script,
    timestamp: u32,
    bits: u32,
    nonce: u32,
    version: i32,
) -> Block {
    let coinbase = Transaction::coinbase(
        genesis_script_sig(coinbase_message),
        reward_value,
        reward_script,
    );
    let merkle_root = coinbase.hash();

    let header = BlockHeader::new(version, Hash::zero(), merkle_root, timestamp, bits, nonce);

    Block::new(header, vec![coinbase])
}

/// Verify a genesis block against its expected hash and merkle root
///
/// The header's merkle root must also match the one recomputed from the
/// transactions, so tampering with the coinbase is caught even when the header
/// is left untouched.
pub fn verify_genesis(block: &Block, expected_hash: &Hash, expected_merkle_root: &Hash) -> bool {
    block.is_genesis()
        && block.header.merkle_root == *expected_merkle_root
        && block.compute_merkle_root() == block.header.merkle_root
        && block.hash() == *expected_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE: &str = "National Suicide Prevention Hotline 1-800-273-8255";
    const PUBKEY: &str = "0459f0e955f4b6f1e65dce17d1bbf08218867a4b7b8d1de4675a1cf4d884eca8480ebdb847c42acff26a967177f35082666883cb98b2e9044c10bd842b37b79bbe";
    const MERKLE_ROOT: &str = "89c57ede80f9489547c381b653c4f70d5057a2570ce7b48c9e7fa7afbade012c";
    const HASH: &str = "8ab5bd3c2a0bd5f1755587c725b1cee1fbe9d48101993818b29519c374087052";

    fn spec() -> GenesisSpec {
        GenesisSpec {
            coinbase_message: MESSAGE,
            reward: 100_000_000,
            reward_pubkey: PUBKEY,
            timestamp: 1562470070,
            bits: 0x1e0ffff0,
            nonce: 652550,
            version: 1,
            expected_hash: HASH,
            expected_merkle_root: MERKLE_ROOT,
        }
    }

    fn verify(block: &Block) -> bool {
        let spec = spec();
        verify_genesis(
            block,
            &spec.expected_hash().unwrap(),
            &spec.expected_merkle_root().unwrap(),
        )
    }

    #[test]
    fn test_genesis_is_deterministic() {
        assert_eq!(spec().build().unwrap(), spec().build().unwrap());
    }

    #[test]
    fn test_genesis_merkle_root_and_hash() {
        let genesis = spec().build().unwrap();
        assert_eq!(genesis.header.merkle_root.to_hex(), MERKLE_ROOT);
        assert_eq!(genesis.hash().to_hex(), HASH);
        assert!(verify(&genesis));
    }

    #[test]
    fn test_genesis_script_sig_layout() {
        let script = genesis_script_sig(MESSAGE.as_bytes());
        assert_eq!(&script.0[..7], &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04]);
        assert_eq!(script.0[7] as usize, MESSAGE.len());
    }

    #[test]
    fn test_genesis_has_single_coinbase() {
        let genesis = spec().build().unwrap();
        assert!(genesis.is_genesis());
        assert_eq!(genesis.transactions.len(), 1);
        assert!(genesis.transactions[0].is_coinbase());
        assert_eq!(genesis.transactions[0].total_output_value(), 100_000_000);
    }

    #[test]
    fn test_mutated_timestamp_fails() {
        let mut genesis = spec().build().unwrap();
        genesis.header.timestamp += 1;
        assert!(!verify(&genesis));
    }

    #[test]
    fn test_mutated_nonce_fails() {
        let mut genesis = spec().build().unwrap();
        genesis.header.nonce += 1;
        assert!(!verify(&genesis));
    }

    #[test]
    fn test_mutated_coinbase_message_fails() {
        let altered = GenesisSpec {
            coinbase_message: "National Suicide Prevention Hotline 1-800-273-8256",
            ..spec()
        };
        assert!(!verify(&altered.build().unwrap()));

        // Tampering with the transaction alone is caught by the merkle recheck
        let mut genesis = spec().build().unwrap();
        genesis.transactions[0].inputs[0].script_sig =
            genesis_script_sig(b"another message");
        assert!(!verify(&genesis));
    }
}
