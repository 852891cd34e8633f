//! Network parameter registry
//!
//! Declarations for every network, the verified profiles built from them and
//! the process-wide selection.

mod chain;
mod error;
mod network;
mod networks;
mod prefixes;
mod profile;
mod registry;

pub use chain::*;
pub use error::*;
pub use network::*;
pub use networks::*;
pub use prefixes::*;
pub use profile::*;
pub use registry::*;
