//! Network declarations
//!
//! Main is declared in full. Testnet starts from Main, Regtest from Testnet and
//! UnitTest from Main; each lists only its overrides before `..BASE`.

use super::chain::{ChainParams, CheckpointData, ConsensusSwitches, DISABLED_HEIGHT};
use super::{Base58Prefixes, NetworkId};
use crate::constants::COIN;
use crate::node::GenesisSpec;
use crate::p2p::{DnsSeed, SeedSpec};

/// Display-order hash of the genesis block shared by every network
pub const GENESIS_HASH: &str =
    "8ab5bd3c2a0bd5f1755587c725b1cee1fbe9d48101993818b29519c374087052";

/// Display-order merkle root of the genesis block
pub const GENESIS_MERKLE_ROOT: &str =
    "89c57ede80f9489547c381b653c4f70d5057a2570ce7b48c9e7fa7afbade012c";

const GENESIS: GenesisSpec = GenesisSpec {
    coinbase_message: "National Suicide Prevention Hotline 1-800-273-8255",
    reward: COIN,
    reward_pubkey: "0459f0e955f4b6f1e65dce17d1bbf08218867a4b7b8d1de4675a1cf4d884eca8480ebdb847c42acff26a967177f35082666883cb98b2e9044c10bd842b37b79bbe",
    timestamp: 1562470070,
    bits: 0x1e0ffff0,
    nonce: 652550,
    version: 1,
    expected_hash: GENESIS_HASH,
    expected_merkle_root: GENESIS_MERKLE_ROOT,
};

//   What makes a good checkpoint block?
// + Is surrounded by blocks with reasonable timestamps
//   (no blocks before with a timestamp after, none after with
//    timestamp before)
// + Contains no strange transactions
const MAIN_CHECKPOINTS: CheckpointData = CheckpointData {
    checkpoints: &[(0, GENESIS_HASH)],
    last_checkpoint_time: 1562470070,
    total_transactions: 0,
    transactions_per_day: 200.0,
};

const TESTNET_CHECKPOINTS: CheckpointData = CheckpointData {
    checkpoints: &[(0, GENESIS_HASH)],
    last_checkpoint_time: 1562470070,
    total_transactions: 0,
    transactions_per_day: 250.0,
};

const REGTEST_CHECKPOINTS: CheckpointData = CheckpointData {
    checkpoints: &[(0, GENESIS_HASH)],
    last_checkpoint_time: 1562470070,
    total_transactions: 0,
    transactions_per_day: 100.0,
};

const MAIN_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed {
        name: "140.82.48.162",
        host: "140.82.48.162",
    },
    DnsSeed {
        name: "8.9.36.49",
        host: "8.9.36.49",
    },
    DnsSeed {
        name: "95.179.140.237",
        host: "95.179.140.237",
    },
    DnsSeed {
        name: "136.244.101.5",
        host: "136.244.101.5",
    },
    DnsSeed {
        name: "95.179.132.243",
        host: "95.179.132.243",
    },
];

// Stand-in for the compiled Main seed table: the DNS seed hosts on the
// default port.
const MAIN_FIXED_SEEDS: &[SeedSpec] = &[
    SeedSpec::ipv4([140, 82, 48, 162], 1112),
    SeedSpec::ipv4([8, 9, 36, 49], 1112),
    SeedSpec::ipv4([95, 179, 140, 237], 1112),
    SeedSpec::ipv4([136, 244, 101, 5], 1112),
    SeedSpec::ipv4([95, 179, 132, 243], 1112),
];

// Stand-in for the compiled Testnet seed table. Testnet declares no DNS seeds
// to mirror, so it starts empty.
const TESTNET_FIXED_SEEDS: &[SeedSpec] = &[];

const ZEROCOIN_MODULUS: &str = concat!(
    "25195908475657893494027183240048398571429282126204032027777137836043662020707595556264018525880784",
    "4069182906412495150821892985591491761845028084891200728449926873928072877767359714183472702618963750149718246911",
    "6507761337985909570009733045974880842840179742910064245869181719511874612151517265463228221686998754918242243363",
    "7259085141865462043576798423387184774447920739934236584823824281198163815010674810451660377306056201619676256133",
    "8441436038339044149526344321901146575444541784240209246165157233507787077498171257724679629263863563732899121548",
    "31438167899885040445364023527381951378636564391212010397122822120720357",
);

/// Production network
pub const MAIN_PARAMS: ChainParams = ChainParams {
    network_id: NetworkId::Main,
    // Rarely used upper ASCII, not valid UTF-8, a large int at any alignment
    message_start: [0x5a, 0x5b, 0x5c, 0x5d],
    alert_pubkey: "04f58b24373ca630e24c1a3c10faddb12941bed8aba25439733c483c2921793565430a442c0016c8ef2f8e8437d1e3ce7905c506a69ed16d244f26f46ba3144fad",
    default_port: 1112,
    pow_limit_shift: 20,
    max_reorganization_depth: 100,
    switches: ConsensusSwitches {
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        default_consistency_checks: false,
        allow_min_difficulty_blocks: false,
        skip_proof_of_work_check: false,
    },
    miner_threads: 0,
    target_timespan: 60,
    target_spacing: 60,
    last_pow_block: 200,
    zerocoin_start_height: DISABLED_HEIGHT,
    zerocoin_last_old_params: DISABLED_HEIGHT,
    required_accumulation: 1,
    maturity: 20,
    masternode_count_drift: 20,
    masternode_collateral: 2000,
    masternode_collateral_new: 5000,
    min_stake_input: 20 * COIN,
    modifier_update_block: 615800,
    max_money_out: 82_000_000 * COIN,
    genesis: GENESIS,
    dns_seeds: MAIN_DNS_SEEDS,
    fixed_seeds: MAIN_FIXED_SEEDS,
    base58_prefixes: Base58Prefixes {
        pubkey_address: [25],
        script_address: [43],
        secret_key: [212],
        ext_public_key: [0x02, 0x2D, 0x25, 0x33],
        ext_secret_key: [0x02, 0x21, 0x31, 0x2B],
        // SLIP-0044 coin type
        ext_coin_type: [0x80, 0x00, 0x00, 0x77],
    },
    bech32_hrp: "ab",
    mining_requires_peers: false,
    require_standard: true,
    mine_blocks_on_demand: false,
    testnet_to_be_deprecated_field_rpc: false,
    headers_first_syncing_active: false,
    pool_max_transactions: 3,
    enforce_new_spork_key: 1563580800, // 07/20/2019 @ 12:00am (UTC)
    reject_old_spork_key: 1563580800,
    spork_key: "024e5c4ba539033389b20d7ae149d8b98338cc90b6db94b1fb79bf87ee99902721",
    spork_key_old: "03fd7122ee805bf78beac809cb4f5178214d0e83a7da09ebe167de7934df20e2bb",
    obfuscation_pool_dummy_address: "BPaLkBnuXTLqB1VdC5RGUeHYq88X8YcWcm",
    start_masternode_payments: 1562470070,
    zerocoin_modulus: ZEROCOIN_MODULUS,
    budget_fee_confirmations: 6,
    checkpoints: MAIN_CHECKPOINTS,
};

/// Public test network
pub const TESTNET_PARAMS: ChainParams = ChainParams {
    network_id: NetworkId::Testnet,
    message_start: [0x6a, 0x7a, 0x8a, 0x9a],
    alert_pubkey: "04cb6591fe3441beb224cf5640fdc8c2143982899445c95a16b27918067826b68b822e4671be534be381aa57b600b25bf668833f5943cb851563d95ab8ead26d36",
    default_port: 55001,
    switches: ConsensusSwitches {
        enforce_block_upgrade_majority: 51,
        reject_block_outdated_majority: 75,
        to_check_block_upgrade_majority: 100,
        default_consistency_checks: false,
        allow_min_difficulty_blocks: true,
        skip_proof_of_work_check: false,
    },
    miner_threads: 0,
    target_timespan: 60,
    target_spacing: 60,
    last_pow_block: 200,
    maturity: 1,
    masternode_count_drift: 4,
    masternode_collateral: 1000,
    masternode_collateral_new: 5000,
    min_stake_input: 15 * COIN,
    modifier_update_block: 51197,
    max_money_out: 43_199_500 * COIN,
    zerocoin_start_height: DISABLED_HEIGHT,
    zerocoin_last_old_params: DISABLED_HEIGHT,
    dns_seeds: &[],
    fixed_seeds: TESTNET_FIXED_SEEDS,
    base58_prefixes: Base58Prefixes {
        pubkey_address: [85],
        script_address: [19],
        secret_key: [239],
        ext_public_key: [0x3a, 0x80, 0x61, 0xa0],
        ext_secret_key: [0x3a, 0x80, 0x58, 0x37],
        // Testnet coin type 1, shared by all coins
        ext_coin_type: [0x80, 0x00, 0x00, 0x01],
    },
    bech32_hrp: "tv",
    mining_requires_peers: false,
    require_standard: false,
    mine_blocks_on_demand: false,
    testnet_to_be_deprecated_field_rpc: false,
    pool_max_transactions: 2,
    spork_key: "03fd7122ee805bf78beac809cb4f5178214d0e83a7da09ebe167de7934df20e2bb",
    obfuscation_pool_dummy_address: "BPaLkBnuXTLqB1VdC5RGUeHYq88X8YcWcm",
    start_masternode_payments: 1562470070,
    checkpoints: TESTNET_CHECKPOINTS,
    ..MAIN_PARAMS
};

/// Local regression-test network
pub const REGTEST_PARAMS: ChainParams = ChainParams {
    network_id: NetworkId::Regtest,
    message_start: [0xe1, 0xef, 0xee, 0xec],
    default_port: 39793,
    pow_limit_shift: 1,
    switches: ConsensusSwitches {
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        default_consistency_checks: true,
        allow_min_difficulty_blocks: true,
        skip_proof_of_work_check: false,
    },
    miner_threads: 1,
    target_timespan: 24 * 60 * 60,
    target_spacing: 60,
    maturity: 0,
    // Proof of stake complicates regtest because of timing issues
    last_pow_block: 999_999_999,
    zerocoin_last_old_params: 499,
    zerocoin_start_height: 100,
    dns_seeds: &[],
    fixed_seeds: &[],
    mining_requires_peers: false,
    require_standard: false,
    mine_blocks_on_demand: true,
    testnet_to_be_deprecated_field_rpc: false,
    required_accumulation: 1,
    spork_key: "04cded1204a57acd6280c8499b7a2df052609dbf96546453984d632204d651d72a37013edc9d115e5a385e100eb7e867923fdd0bb7d9dc31aa1eb9d59b00c76697",
    checkpoints: REGTEST_CHECKPOINTS,
    ..TESTNET_PARAMS
};

/// In-process unit-test network
pub const UNITTEST_PARAMS: ChainParams = ChainParams {
    network_id: NetworkId::UnitTest,
    default_port: 39791,
    dns_seeds: &[],
    fixed_seeds: &[],
    mining_requires_peers: false,
    switches: ConsensusSwitches {
        default_consistency_checks: true,
        allow_min_difficulty_blocks: false,
        ..MAIN_PARAMS.switches
    },
    mine_blocks_on_demand: true,
    // Unit tests share Main's checkpoints
    checkpoints: MAIN_CHECKPOINTS,
    ..MAIN_PARAMS
};

/// The declaration for `network`
pub fn chain_params(network: NetworkId) -> &'static ChainParams {
    match network {
        NetworkId::Main => &MAIN_PARAMS,
        NetworkId::Testnet => &TESTNET_PARAMS,
        NetworkId::Regtest => &REGTEST_PARAMS,
        NetworkId::UnitTest => &UNITTEST_PARAMS,
    }
}
