//! Consensus module - block structure, scripts, targets, checkpoints and the version gate

mod block;
mod checkpoints;
mod difficulty;
mod encode;
mod script;
mod transaction;
mod version;

pub use block::*;
pub use checkpoints::*;
pub use difficulty::*;
pub use encode::*;
pub use script::*;
pub use transaction::*;
pub use version::*;
