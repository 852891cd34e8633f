//! Declared chain parameters
//!
//! A [`ChainParams`] is the plain-data declaration of one network: every field
//! written out, nothing computed. Derived networks are built from a base
//! declaration with struct update syntax, so each override is visible at the
//! declaration site and every field stays inspectable per network.

use serde::Serialize;

use super::{Base58Prefixes, NetworkId};
use crate::consensus::Amount;
use crate::node::GenesisSpec;
use crate::p2p::{DnsSeed, SeedSpec};

/// Height used to mark a feature as never activating
pub const DISABLED_HEIGHT: u32 = i32::MAX as u32;

/// Consensus switches the unit-test network may change at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsensusSwitches {
    pub enforce_block_upgrade_majority: u32,
    pub reject_block_outdated_majority: u32,
    pub to_check_block_upgrade_majority: u32,
    pub default_consistency_checks: bool,
    pub allow_min_difficulty_blocks: bool,
    pub skip_proof_of_work_check: bool,
}

/// Declared checkpoints and the chain statistics at the last one
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckpointData {
    /// `(height, display-order hash hex)` in ascending height order
    pub checkpoints: &'static [(u32, &'static str)],
    pub last_checkpoint_time: i64,
    pub total_transactions: u64,
    pub transactions_per_day: f64,
}

/// Every constant of one network
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChainParams {
    pub network_id: NetworkId,
    /// Wire message start bytes
    pub message_start: [u8; 4],
    /// Hex public key for network alerts
    pub alert_pubkey: &'static str,
    pub default_port: u16,
    /// Proof-of-work limit is `~0 >> pow_limit_shift`
    pub pow_limit_shift: u32,
    pub max_reorganization_depth: u32,
    pub switches: ConsensusSwitches,
    /// Default miner threads (0 = one per core)
    pub miner_threads: u32,
    /// Difficulty retarget timespan in seconds
    pub target_timespan: i64,
    /// Target block spacing in seconds
    pub target_spacing: i64,
    pub last_pow_block: u32,
    pub zerocoin_start_height: u32,
    pub zerocoin_last_old_params: u32,
    pub required_accumulation: u32,
    /// Confirmations before a coinbase or coinstake may be spent
    pub maturity: u32,
    pub masternode_count_drift: u32,
    /// Masternode collateral in whole coins
    pub masternode_collateral: i64,
    /// Masternode collateral in whole coins after the collateral change
    pub masternode_collateral_new: i64,
    pub min_stake_input: Amount,
    pub modifier_update_block: u32,
    /// Money supply ceiling
    pub max_money_out: Amount,
    pub genesis: GenesisSpec,
    pub dns_seeds: &'static [DnsSeed],
    pub fixed_seeds: &'static [SeedSpec],
    pub base58_prefixes: Base58Prefixes,
    pub bech32_hrp: &'static str,
    pub mining_requires_peers: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,
    pub pool_max_transactions: u32,
    /// Time from which messages must be signed with `spork_key`
    pub enforce_new_spork_key: i64,
    /// Time from which messages signed with `spork_key_old` are rejected
    pub reject_old_spork_key: i64,
    pub spork_key: &'static str,
    pub spork_key_old: &'static str,
    pub obfuscation_pool_dummy_address: &'static str,
    pub start_masternode_payments: i64,
    /// Decimal RSA modulus for the zerocoin accumulator
    pub zerocoin_modulus: &'static str,
    pub budget_fee_confirmations: u32,
    pub checkpoints: CheckpointData,
}
