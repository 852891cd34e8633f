//! Checkpoint table
//!
//! Known-good block hashes at fixed heights, plus the sync-progress metadata
//! recorded when the last checkpoint was taken. The validation engine uses the
//! table to refuse reorganizations that fork below an accepted checkpoint.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::crypto::Hash;

/// Weight of a block verified with full signature checks relative to one
/// covered by a checkpoint
const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Checkpoint construction errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("Checkpoint table is empty")]
    Empty,
    #[error("Checkpoint heights not strictly increasing: {height} follows {previous}")]
    NotIncreasing { previous: u32, height: u32 },
    #[error("Checkpoint at height {0} has a zero hash")]
    ZeroHash(u32),
}

/// Metadata describing the chain at the last checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckpointMetadata {
    /// UNIX timestamp of the last checkpoint block
    pub last_checkpoint_time: i64,
    /// Total number of transactions between genesis and the last checkpoint
    pub total_transactions: u64,
    /// Estimated number of transactions per day after the checkpoint
    pub transactions_per_day: f64,
}

/// Ordered height -> hash mapping, read-only after construction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointTable {
    checkpoints: BTreeMap<u32, Hash>,
    metadata: CheckpointMetadata,
}

impl CheckpointTable {
    /// Build a table from entries in declaration order
    pub fn new<I>(entries: I, metadata: CheckpointMetadata) -> Result<Self, CheckpointError>
    where
        I: IntoIterator<Item = (u32, Hash)>,
    {
        let mut checkpoints = BTreeMap::new();
        let mut previous: Option<u32> = None;

        for (height, hash) in entries {
            if let Some(previous) = previous {
                if height <= previous {
                    return Err(CheckpointError::NotIncreasing { previous, height });
                }
            }
            if hash.is_zero() {
                return Err(CheckpointError::ZeroHash(height));
            }
            checkpoints.insert(height, hash);
            previous = Some(height);
        }

        if checkpoints.is_empty() {
            return Err(CheckpointError::Empty);
        }

        Ok(Self {
            checkpoints,
            metadata,
        })
    }

    /// Expected hash at `height`, if that height is checkpointed
    pub fn lookup(&self, height: u32) -> Option<Hash> {
        self.checkpoints.get(&height).copied()
    }

    /// Height of the highest checkpoint
    pub fn highest_checkpoint_height(&self) -> u32 {
        self.last_checkpoint().0
    }

    /// The highest checkpoint entry
    pub fn last_checkpoint(&self) -> (u32, Hash) {
        // Construction rejects empty tables
        self.checkpoints
            .iter()
            .next_back()
            .map(|(height, hash)| (*height, *hash))
            .unwrap_or((0, Hash::zero()))
    }

    /// False only when a checkpoint exists at `height` and disagrees with `hash`
    pub fn check_block(&self, height: u32, hash: &Hash) -> bool {
        match self.checkpoints.get(&height) {
            Some(expected) => expected == hash,
            None => true,
        }
    }

    /// Estimate how far initial sync has progressed, in `[0, 1]`
    ///
    /// `chain_tx` is the cumulative transaction count at the current tip and
    /// `block_time` its timestamp. Work before the last checkpoint counts as
    /// cheap; work after it is weighted by the signature-check factor when
    /// `sigchecks` is set.
    pub fn guess_verification_progress(
        &self,
        chain_tx: u64,
        block_time: i64,
        now: i64,
        sigchecks: bool,
    ) -> f64 {
        let factor = if sigchecks {
            SIGCHECK_VERIFICATION_FACTOR
        } else {
            1.0
        };
        let checkpoint_tx = self.metadata.total_transactions;
        let per_day = self.metadata.transactions_per_day;

        let (work_before, work_after) = if chain_tx <= checkpoint_tx {
            let cheap_before = chain_tx as f64;
            let cheap_after = (checkpoint_tx - chain_tx) as f64;
            let elapsed = (now - self.metadata.last_checkpoint_time).max(0) as f64;
            let expensive_after = elapsed / SECONDS_PER_DAY * per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = checkpoint_tx as f64;
            let expensive_before = (chain_tx - checkpoint_tx) as f64;
            let elapsed = (now - block_time).max(0) as f64;
            let expensive_after = elapsed / SECONDS_PER_DAY * per_day;
            (
                cheap_before + expensive_before * factor,
                expensive_after * factor,
            )
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 1.0;
        }
        work_before / total
    }

    pub fn metadata(&self) -> &CheckpointMetadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Checkpoints in ascending height order
    pub fn iter(&self) -> impl Iterator<Item = (u32, Hash)> + '_ {
        self.checkpoints.iter().map(|(height, hash)| (*height, *hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::double_sha256;

    fn metadata() -> CheckpointMetadata {
        CheckpointMetadata {
            last_checkpoint_time: 1_000_000,
            total_transactions: 1_000,
            transactions_per_day: 100.0,
        }
    }

    fn table() -> CheckpointTable {
        CheckpointTable::new(
            vec![
                (0, double_sha256(b"a")),
                (10, double_sha256(b"b")),
                (25, double_sha256(b"c")),
            ],
            metadata(),
        )
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let table = table();
        assert_eq!(table.lookup(10), Some(double_sha256(b"b")));
        assert_eq!(table.lookup(11), None);
        assert_eq!(table.highest_checkpoint_height(), 25);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_rejects_out_of_order_heights() {
        let result = CheckpointTable::new(
            vec![(10, double_sha256(b"a")), (10, double_sha256(b"b"))],
            metadata(),
        );
        assert_eq!(
            result,
            Err(CheckpointError::NotIncreasing {
                previous: 10,
                height: 10
            })
        );
    }

    #[test]
    fn test_rejects_empty_and_zero_hash() {
        assert_eq!(
            CheckpointTable::new(Vec::new(), metadata()),
            Err(CheckpointError::Empty)
        );
        assert_eq!(
            CheckpointTable::new(vec![(3, Hash::zero())], metadata()),
            Err(CheckpointError::ZeroHash(3))
        );
    }

    #[test]
    fn test_check_block() {
        let table = table();
        assert!(table.check_block(10, &double_sha256(b"b")));
        assert!(!table.check_block(10, &double_sha256(b"x")));
        assert!(table.check_block(11, &double_sha256(b"x")));
    }

    #[test]
    fn test_progress_before_checkpoint() {
        let table = table();
        let now = metadata().last_checkpoint_time;
        assert!((table.guess_verification_progress(500, 0, now, true) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_progress_after_checkpoint_at_tip() {
        let table = table();
        let progress = table.guess_verification_progress(2_000, 5_000_000, 5_000_000, true);
        assert!((progress - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_behind_tip() {
        let table = table();
        // One day behind: 100 expensive txs still to verify
        let progress = table.guess_verification_progress(1_001, 0, 86_400, false);
        assert!((progress - 1_001.0 / 1_101.0).abs() < 1e-9);
    }
}
