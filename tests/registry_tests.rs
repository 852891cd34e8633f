//! Registry lifecycle and end-to-end network profile tests
//!
//! Each test owns its own `ParamsRegistry`, so selections never leak between
//! tests.

use beetok_params::crypto::Hash;
use beetok_params::p2p::LiteralLookup;
use beetok_params::params::{
    Base58Type, BuildState, NetworkId, ParamsRegistry, ProfileError, RegistryError,
    GENESIS_HASH, MAIN_PARAMS, REGTEST_PARAMS, TESTNET_PARAMS, UNITTEST_PARAMS,
};

// ============================================================================
// SELECTION
// ============================================================================

#[test]
fn test_select_main() {
    let registry = ParamsRegistry::new();
    registry.select(NetworkId::Main).unwrap();

    let active = registry.active();
    assert_eq!(active.network_id(), NetworkId::Main);
    assert_eq!(active.network_name(), "main");
    assert_eq!(active.message_start(), [0x5a, 0x5b, 0x5c, 0x5d]);
    assert_eq!(active.default_port(), 1112);
}

#[test]
fn test_mutable_access_rejected_on_main() {
    let registry = ParamsRegistry::new();
    registry.select(NetworkId::Main).unwrap();
    assert_eq!(
        registry.as_mutable().unwrap_err(),
        RegistryError::NotUnitTest {
            active: NetworkId::Main
        }
    );
}

#[test]
fn test_mutable_access_rejected_before_select() {
    let registry = ParamsRegistry::new();
    assert_eq!(registry.as_mutable().unwrap_err(), RegistryError::NotSelected);
}

#[test]
fn test_unittest_setters_visible() {
    let registry = ParamsRegistry::new();
    registry.select(NetworkId::UnitTest).unwrap();

    let mutable = registry.as_mutable().unwrap();
    mutable.set_enforce_block_upgrade_majority(10);
    mutable.set_reject_block_outdated_majority(20);
    mutable.set_to_check_block_upgrade_majority(30);
    mutable.set_default_consistency_checks(false);
    mutable.set_allow_min_difficulty_blocks(true);
    mutable.set_skip_proof_of_work_check(true);

    let active = registry.active();
    assert_eq!(active.enforce_block_upgrade_majority(), 10);
    assert_eq!(active.reject_block_outdated_majority(), 20);
    assert_eq!(active.to_check_block_upgrade_majority(), 30);
    assert!(!active.default_consistency_checks());
    assert!(active.allow_min_difficulty_blocks());
    assert!(active.skip_proof_of_work_check());

    // The declaration keeps its original values
    assert_eq!(active.params().switches, UNITTEST_PARAMS.switches);
}

#[test]
fn test_unittest_switches_start_from_declaration() {
    let registry = ParamsRegistry::new();
    let profile = registry.select(NetworkId::UnitTest).unwrap();
    assert_eq!(profile.switches(), UNITTEST_PARAMS.switches);
    assert!(profile.default_consistency_checks());
    assert!(!profile.allow_min_difficulty_blocks());
}

#[test]
fn test_conflicting_selection() {
    let registry = ParamsRegistry::new();
    registry.select(NetworkId::Testnet).unwrap();
    assert!(matches!(
        registry.select(NetworkId::Regtest),
        Err(RegistryError::ConflictingSelection {
            active: NetworkId::Testnet,
            requested: NetworkId::Regtest,
        })
    ));
}

#[test]
fn test_profile_for_does_not_select() {
    let registry = ParamsRegistry::new();
    let testnet = registry.profile_for(NetworkId::Testnet).unwrap();
    assert_eq!(testnet.default_port(), 55001);
    assert_eq!(registry.active_network(), None);

    // Another network can still be selected afterwards
    registry.select(NetworkId::Main).unwrap();
    assert_eq!(registry.active_network(), Some(NetworkId::Main));
}

// ============================================================================
// END-TO-END PROFILES
// ============================================================================

#[test]
fn test_regtest_end_to_end() {
    let registry = ParamsRegistry::new();
    let regtest = registry.select(NetworkId::Regtest).unwrap();

    assert_eq!(regtest.default_port(), 39793);
    assert!(regtest.mine_blocks_on_demand());
    assert!(!regtest.require_standard());

    let genesis = Hash::from_hex(GENESIS_HASH).unwrap();
    let checkpoints: Vec<(u32, Hash)> = regtest.checkpoints().iter().collect();
    assert_eq!(checkpoints, vec![(0, genesis)]);
    assert!(regtest.checkpoints().check_block(0, &genesis));
    assert!(regtest.checkpoints().check_block(1, &Hash::zero()));

    assert!(regtest.seeds().is_empty());
    assert!(regtest.dns_seeds().is_empty());
    assert_eq!(regtest.pow_limit().to_compact(), 0x207fffff);
}

#[test]
fn test_genesis_verifies_on_every_network() {
    let registry = ParamsRegistry::new();
    for id in NetworkId::ALL {
        let profile = registry.profile_for(id).unwrap();
        assert_eq!(profile.genesis_block().hash().to_hex(), GENESIS_HASH);
        assert_eq!(registry.build_state(id), BuildState::Built);
    }
}

#[test]
fn test_main_genesis_matches_published_hash() {
    const PUBLISHED: &str = "8ab5bd3c2a0bd5f1755587c725b1cee1fbe9d48101993818b29519c374087052";

    let registry = ParamsRegistry::new();
    let main = registry.profile_for(NetworkId::Main).unwrap();
    assert_eq!(main.genesis_hash().to_hex(), PUBLISHED);
    assert_eq!(main.genesis_block().hash().to_hex(), PUBLISHED);

    let (height, hash) = main.checkpoints().iter().next().unwrap();
    assert_eq!(height, 0);
    assert_eq!(hash.to_hex(), PUBLISHED);
}

#[test]
fn test_testnet_profile() {
    let registry = ParamsRegistry::new();
    let testnet = registry.profile_for(NetworkId::Testnet).unwrap();

    assert_eq!(testnet.message_start(), [0x6a, 0x7a, 0x8a, 0x9a]);
    assert_eq!(testnet.maturity(), 1);
    assert!(testnet.allow_min_difficulty_blocks());
    assert_eq!(testnet.base58_prefix(Base58Type::PubkeyAddress), &[85]);
    assert_eq!(testnet.bech32_hrp(), "tv");
    assert_eq!(testnet.params().checkpoints.transactions_per_day, 250.0);
}

#[test]
fn test_main_seeds_and_dns_lookup() {
    let registry = ParamsRegistry::new();
    let main = registry.profile_for(NetworkId::Main).unwrap();

    assert_eq!(main.seeds().len(), 5);
    let resolved = main.resolve_dns_seeds(&LiteralLookup);
    assert_eq!(resolved.len(), 5);
    assert!(resolved.iter().all(|seed| seed.addr.port() == 1112));
}

#[test]
fn test_obfuscation_dummy_address_matches_main_prefix() {
    let registry = ParamsRegistry::new();
    let main = registry.profile_for(NetworkId::Main).unwrap();
    let payload = main
        .decode_base58(
            Base58Type::PubkeyAddress,
            main.params().obfuscation_pool_dummy_address,
        )
        .unwrap();
    assert_eq!(
        main.encode_base58(Base58Type::PubkeyAddress, &payload),
        "BPaLkBnuXTLqB1VdC5RGUeHYq88X8YcWcm"
    );
}

// ============================================================================
// FAILED BUILDS
// ============================================================================

#[test]
fn test_corrupted_declaration_fails_permanently() {
    let mut broken = REGTEST_PARAMS;
    broken.genesis.nonce += 1;
    let registry =
        ParamsRegistry::from_declarations([MAIN_PARAMS, TESTNET_PARAMS, broken, UNITTEST_PARAMS]);

    assert_eq!(registry.build_state(NetworkId::Regtest), BuildState::Unbuilt);
    let err = registry.select(NetworkId::Regtest).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Profile(ProfileError::GenesisHashMismatch {
            network: NetworkId::Regtest,
            ..
        })
    ));
    assert_eq!(registry.build_state(NetworkId::Regtest), BuildState::Failed);
    assert_eq!(registry.select(NetworkId::Regtest).unwrap_err(), err);

    // Other networks are unaffected
    registry.select(NetworkId::Main).unwrap();
    assert_eq!(registry.build_state(NetworkId::Main), BuildState::Built);
}
