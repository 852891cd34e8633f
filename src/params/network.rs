//! Network identifiers

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the mutually exclusive networks a process can run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetworkId {
    /// Production network
    Main,
    /// Public test network
    Testnet,
    /// Local regression-test network
    Regtest,
    /// In-process unit-test network
    UnitTest,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown network '{0}' (expected main, test, regtest or unittest)")]
pub struct NetworkIdError(pub String);

impl NetworkId {
    pub const ALL: [NetworkId; 4] = [
        NetworkId::Main,
        NetworkId::Testnet,
        NetworkId::Regtest,
        NetworkId::UnitTest,
    ];

    /// Canonical id string
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Testnet => "test",
            NetworkId::Regtest => "regtest",
            NetworkId::UnitTest => "unittest",
        }
    }

    /// Dense index, used for per-network slots
    pub(crate) fn index(&self) -> usize {
        match self {
            NetworkId::Main => 0,
            NetworkId::Testnet => 1,
            NetworkId::Regtest => 2,
            NetworkId::UnitTest => 3,
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = NetworkIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkId::Main),
            "test" | "testnet" => Ok(NetworkId::Testnet),
            "regtest" => Ok(NetworkId::Regtest),
            "unittest" => Ok(NetworkId::UnitTest),
            _ => Err(NetworkIdError(s.to_string())),
        }
    }
}

impl Serialize for NetworkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_and_aliases() {
        for id in NetworkId::ALL {
            assert_eq!(id.as_str().parse::<NetworkId>(), Ok(id));
        }
        assert_eq!("MainNet".parse::<NetworkId>(), Ok(NetworkId::Main));
        assert_eq!("testnet".parse::<NetworkId>(), Ok(NetworkId::Testnet));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "signet".parse::<NetworkId>(),
            Err(NetworkIdError("signet".into()))
        );
    }

    #[test]
    fn test_indices_are_distinct() {
        let mut seen = [false; 4];
        for id in NetworkId::ALL {
            assert!(!seen[id.index()]);
            seen[id.index()] = true;
        }
    }
}
