//! P2P bootstrap module - seed resolution

mod seeds;

pub use seeds::*;
