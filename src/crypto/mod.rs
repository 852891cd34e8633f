//! Cryptography module - Quark and double SHA-256 hashing, Merkle roots, spork keys

mod bmw;
mod hash;
mod keys;
mod merkle;

pub use hash::*;
pub use keys::*;
pub use merkle::*;
