//! Built network profiles
//!
//! A [`NetworkProfile`] is a [`ChainParams`] declaration that passed every
//! startup check: genesis rebuilt and verified, checkpoints well formed, keys
//! parsed and fixed seeds resolved. Profiles are immutable except for the
//! consensus switches, which only the unit-test network lets callers change.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use tracing::debug;

use super::chain::{ChainParams, ConsensusSwitches};
use super::{AddressError, Base58Type, NetworkId, ProfileError};
use crate::consensus::{
    bits_within_limit, Amount, Block, CheckpointMetadata, CheckpointTable, Target,
};
use crate::crypto::{Hash, SporkPublicKey};
use crate::node::verify_genesis;
use crate::p2p::{resolve_dns, resolve_fixed, DnsSeed, SeedAddress, SeedLookup};

const ALERT_PUBKEY_LEN: usize = 65;

/// Live consensus switches
#[derive(Debug)]
struct TunableSwitches {
    enforce_block_upgrade_majority: AtomicU32,
    reject_block_outdated_majority: AtomicU32,
    to_check_block_upgrade_majority: AtomicU32,
    default_consistency_checks: AtomicBool,
    allow_min_difficulty_blocks: AtomicBool,
    skip_proof_of_work_check: AtomicBool,
}

impl TunableSwitches {
    fn new(declared: &ConsensusSwitches) -> Self {
        Self {
            enforce_block_upgrade_majority: AtomicU32::new(declared.enforce_block_upgrade_majority),
            reject_block_outdated_majority: AtomicU32::new(declared.reject_block_outdated_majority),
            to_check_block_upgrade_majority: AtomicU32::new(
                declared.to_check_block_upgrade_majority,
            ),
            default_consistency_checks: AtomicBool::new(declared.default_consistency_checks),
            allow_min_difficulty_blocks: AtomicBool::new(declared.allow_min_difficulty_blocks),
            skip_proof_of_work_check: AtomicBool::new(declared.skip_proof_of_work_check),
        }
    }

    fn snapshot(&self) -> ConsensusSwitches {
        ConsensusSwitches {
            enforce_block_upgrade_majority: self
                .enforce_block_upgrade_majority
                .load(Ordering::Relaxed),
            reject_block_outdated_majority: self
                .reject_block_outdated_majority
                .load(Ordering::Relaxed),
            to_check_block_upgrade_majority: self
                .to_check_block_upgrade_majority
                .load(Ordering::Relaxed),
            default_consistency_checks: self.default_consistency_checks.load(Ordering::Relaxed),
            allow_min_difficulty_blocks: self.allow_min_difficulty_blocks.load(Ordering::Relaxed),
            skip_proof_of_work_check: self.skip_proof_of_work_check.load(Ordering::Relaxed),
        }
    }
}

/// The verified parameter set of one network
#[derive(Debug)]
pub struct NetworkProfile {
    params: ChainParams,
    genesis: Block,
    genesis_hash: Hash,
    pow_limit: Target,
    checkpoints: CheckpointTable,
    seeds: Vec<SeedAddress>,
    alert_pubkey: Vec<u8>,
    spork_key: SporkPublicKey,
    spork_key_old: SporkPublicKey,
    switches: TunableSwitches,
}

impl NetworkProfile {
    /// Build and verify a profile from its declaration
    pub fn build(params: &ChainParams) -> Result<Self, ProfileError> {
        let network = params.network_id;
        let invalid_hex = |field: &'static str| {
            move |source: hex::FromHexError| ProfileError::InvalidHex {
                network,
                field,
                source,
            }
        };

        let genesis = params.genesis.build().map_err(invalid_hex("genesis reward pubkey"))?;
        let expected_hash = params
            .genesis
            .expected_hash()
            .map_err(invalid_hex("genesis hash"))?;
        let expected_merkle_root = params
            .genesis
            .expected_merkle_root()
            .map_err(invalid_hex("genesis merkle root"))?;

        if !verify_genesis(&genesis, &expected_hash, &expected_merkle_root) {
            let actual_root = genesis.compute_merkle_root();
            if actual_root != expected_merkle_root {
                return Err(ProfileError::GenesisMerkleRootMismatch {
                    network,
                    expected: expected_merkle_root,
                    actual: actual_root,
                });
            }
            return Err(ProfileError::GenesisHashMismatch {
                network,
                expected: expected_hash,
                actual: genesis.hash(),
            });
        }

        let pow_limit = Target::max_shifted_right(params.pow_limit_shift);
        if !bits_within_limit(genesis.header.bits, &pow_limit) {
            return Err(ProfileError::GenesisAbovePowLimit {
                network,
                bits: genesis.header.bits,
            });
        }

        let checkpoints = build_checkpoints(params)?;

        let alert_pubkey = hex::decode(params.alert_pubkey).map_err(invalid_hex("alert pubkey"))?;
        if alert_pubkey.len() != ALERT_PUBKEY_LEN {
            return Err(ProfileError::AlertKeyLength {
                network,
                len: alert_pubkey.len(),
            });
        }

        let parse_key = |field: &'static str, key_hex: &str| {
            SporkPublicKey::from_hex(key_hex).map_err(|source| ProfileError::InvalidKey {
                network,
                field,
                source,
            })
        };
        let spork_key = parse_key("spork key", params.spork_key)?;
        let spork_key_old = parse_key("old spork key", params.spork_key_old)?;

        let seeds = resolve_fixed(params.fixed_seeds);

        debug!(
            network = %network,
            genesis = %expected_hash,
            checkpoints = checkpoints.len(),
            seeds = seeds.len(),
            "Built network profile"
        );

        Ok(Self {
            params: *params,
            genesis,
            genesis_hash: expected_hash,
            pow_limit,
            checkpoints,
            seeds,
            alert_pubkey,
            spork_key,
            spork_key_old,
            switches: TunableSwitches::new(&params.switches),
        })
    }

    /// The declaration this profile was built from
    ///
    /// `switches` holds the declared values; the accessors below return the
    /// live ones.
    pub fn params(&self) -> &ChainParams {
        &self.params
    }

    pub fn network_id(&self) -> NetworkId {
        self.params.network_id
    }

    /// Canonical id string ("main", "test", ...)
    pub fn network_name(&self) -> &'static str {
        self.params.network_id.as_str()
    }

    pub fn message_start(&self) -> [u8; 4] {
        self.params.message_start
    }

    pub fn default_port(&self) -> u16 {
        self.params.default_port
    }

    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    pub fn pow_limit(&self) -> &Target {
        &self.pow_limit
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash {
        self.genesis_hash
    }

    pub fn checkpoints(&self) -> &CheckpointTable {
        &self.checkpoints
    }

    /// Fixed seeds, resolved when the profile was built
    pub fn seeds(&self) -> &[SeedAddress] {
        &self.seeds
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        self.params.dns_seeds
    }

    /// Resolve the DNS seeds on the default port
    pub fn resolve_dns_seeds(&self, lookup: &dyn SeedLookup) -> Vec<SeedAddress> {
        resolve_dns(self.params.dns_seeds, self.params.default_port, lookup)
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.params.base58_prefixes.get(kind)
    }

    pub fn encode_base58(&self, kind: Base58Type, payload: &[u8]) -> String {
        self.params.base58_prefixes.encode(kind, payload)
    }

    pub fn decode_base58(&self, kind: Base58Type, text: &str) -> Result<Vec<u8>, AddressError> {
        self.params.base58_prefixes.decode(kind, text)
    }

    pub fn bech32_hrp(&self) -> &'static str {
        self.params.bech32_hrp
    }

    pub fn spork_key(&self) -> &SporkPublicKey {
        &self.spork_key
    }

    pub fn spork_key_old(&self) -> &SporkPublicKey {
        &self.spork_key_old
    }

    /// Keys whose spork signatures are accepted at `now`
    ///
    /// The current key is always accepted. The old key is accepted only until
    /// the new key is enforced and before old-key rejection starts.
    pub fn accepted_spork_keys(&self, now: i64) -> Vec<&SporkPublicKey> {
        let mut keys = vec![&self.spork_key];
        if now < self.params.enforce_new_spork_key && now < self.params.reject_old_spork_key {
            keys.push(&self.spork_key_old);
        }
        keys
    }

    pub fn max_money_out(&self) -> Amount {
        self.params.max_money_out
    }

    pub fn maturity(&self) -> u32 {
        self.params.maturity
    }

    pub fn last_pow_block(&self) -> u32 {
        self.params.last_pow_block
    }

    pub fn zerocoin_start_height(&self) -> u32 {
        self.params.zerocoin_start_height
    }

    pub fn require_standard(&self) -> bool {
        self.params.require_standard
    }

    pub fn mine_blocks_on_demand(&self) -> bool {
        self.params.mine_blocks_on_demand
    }

    pub fn mining_requires_peers(&self) -> bool {
        self.params.mining_requires_peers
    }

    pub fn enforce_block_upgrade_majority(&self) -> u32 {
        self.switches
            .enforce_block_upgrade_majority
            .load(Ordering::Relaxed)
    }

    pub fn reject_block_outdated_majority(&self) -> u32 {
        self.switches
            .reject_block_outdated_majority
            .load(Ordering::Relaxed)
    }

    pub fn to_check_block_upgrade_majority(&self) -> u32 {
        self.switches
            .to_check_block_upgrade_majority
            .load(Ordering::Relaxed)
    }

    pub fn default_consistency_checks(&self) -> bool {
        self.switches.default_consistency_checks.load(Ordering::Relaxed)
    }

    pub fn allow_min_difficulty_blocks(&self) -> bool {
        self.switches.allow_min_difficulty_blocks.load(Ordering::Relaxed)
    }

    pub fn skip_proof_of_work_check(&self) -> bool {
        self.switches.skip_proof_of_work_check.load(Ordering::Relaxed)
    }

    /// Current values of all consensus switches
    pub fn switches(&self) -> ConsensusSwitches {
        self.switches.snapshot()
    }

    pub(crate) fn set_enforce_block_upgrade_majority(&self, value: u32) {
        self.switches
            .enforce_block_upgrade_majority
            .store(value, Ordering::Relaxed);
    }

    pub(crate) fn set_reject_block_outdated_majority(&self, value: u32) {
        self.switches
            .reject_block_outdated_majority
            .store(value, Ordering::Relaxed);
    }

    pub(crate) fn set_to_check_block_upgrade_majority(&self, value: u32) {
        self.switches
            .to_check_block_upgrade_majority
            .store(value, Ordering::Relaxed);
    }

    pub(crate) fn set_default_consistency_checks(&self, value: bool) {
        self.switches
            .default_consistency_checks
            .store(value, Ordering::Relaxed);
    }

    pub(crate) fn set_allow_min_difficulty_blocks(&self, value: bool) {
        self.switches
            .allow_min_difficulty_blocks
            .store(value, Ordering::Relaxed);
    }

    pub(crate) fn set_skip_proof_of_work_check(&self, value: bool) {
        self.switches
            .skip_proof_of_work_check
            .store(value, Ordering::Relaxed);
    }

    /// Operator-facing summary of the profile
    pub fn summary(&self) -> ProfileSummary<'_> {
        ProfileSummary {
            network: self.network_id(),
            message_start: hex::encode(self.params.message_start),
            default_port: self.params.default_port,
            genesis_hash: self.genesis_hash,
            genesis_merkle_root: self.genesis.header.merkle_root,
            genesis_time: self.genesis.header.timestamp,
            pow_limit: self.pow_limit,
            pow_limit_bits: self.pow_limit.to_compact(),
            max_money_out: self.params.max_money_out,
            last_pow_block: self.params.last_pow_block,
            maturity: self.params.maturity,
            bech32_hrp: self.params.bech32_hrp,
            switches: self.switches(),
            checkpoints: self.checkpoints.iter().collect(),
            checkpoint_metadata: *self.checkpoints.metadata(),
            seeds: &self.seeds,
            dns_seeds: self.params.dns_seeds,
        }
    }
}

/// Serializable view of a profile
#[derive(Debug, Serialize)]
pub struct ProfileSummary<'a> {
    pub network: NetworkId,
    pub message_start: String,
    pub default_port: u16,
    pub genesis_hash: Hash,
    pub genesis_merkle_root: Hash,
    pub genesis_time: u32,
    pub pow_limit: Target,
    pub pow_limit_bits: u32,
    pub max_money_out: Amount,
    pub last_pow_block: u32,
    pub maturity: u32,
    pub bech32_hrp: &'static str,
    pub switches: ConsensusSwitches,
    pub checkpoints: Vec<(u32, Hash)>,
    pub checkpoint_metadata: CheckpointMetadata,
    pub seeds: &'a [SeedAddress],
    pub dns_seeds: &'static [DnsSeed],
}

fn build_checkpoints(params: &ChainParams) -> Result<CheckpointTable, ProfileError> {
    let network = params.network_id;
    let data = &params.checkpoints;

    let entries = data
        .checkpoints
        .iter()
        .map(|(height, hex)| {
            Hash::from_hex(hex)
                .map(|hash| (*height, hash))
                .map_err(|source| ProfileError::InvalidHex {
                    network,
                    field: "checkpoint hash",
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let metadata = CheckpointMetadata {
        last_checkpoint_time: data.last_checkpoint_time,
        total_transactions: data.total_transactions,
        transactions_per_day: data.transactions_per_day,
    };

    CheckpointTable::new(entries, metadata)
        .map_err(|source| ProfileError::Checkpoints { network, source })
}
