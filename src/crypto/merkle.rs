//! Merkle tree implementation
//!
//! Used for computing transaction merkle roots in blocks.

use super::{hash_pair, Hash};

/// Compute the merkle root of a list of hashes
///
/// If the list is empty, returns zero hash.
/// If odd number of elements, duplicates the last element.
pub fn compute_merkle_root(hashes: &[Hash]) -> Hash {
    let mut current_level: Vec<Hash> = match hashes {
        [] => return Hash::zero(),
        [single] => return *single,
        _ => hashes.to_vec(),
    };

    while current_level.len() > 1 {
        if let Some(&last) = current_level.last() {
            if current_level.len() % 2 == 1 {
                current_level.push(last);
            }
        }

        current_level = current_level
            .chunks(2)
            .map(|chunk| hash_pair(&chunk[0], &chunk[1]))
            .collect();
    }

    current_level[0]
}
