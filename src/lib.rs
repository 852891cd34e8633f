//! Beetok Network Parameters
//!
//! Every constant that distinguishes the Beetok main network, testnet, regtest
//! and the in-process unit-test network, plus the one place a node process
//! picks which of them it runs on.
//!
//! ```no_run
//! use beetok_params::params::{params, select_params, NetworkId};
//!
//! select_params(NetworkId::Main).expect("main network profile");
//! assert_eq!(params().default_port(), 1112);
//! ```

pub mod consensus;
pub mod crypto;
pub mod node;
pub mod p2p;
pub mod params;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Base units per BTK (8 decimal places)
    pub const COIN: i64 = 100_000_000;

    /// Number of decimal places
    pub const DECIMAL_PLACES: u8 = 8;

    /// Ticker symbol
    pub const CHAIN_NAME: &str = "BTK";

    /// Full chain name
    pub const CHAIN_FULL_NAME: &str = "Beetok";
}
