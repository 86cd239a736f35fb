//! Property-based and adversarial tests for Altbet network parameters
//!
//! These tests verify invariants hold under random inputs and tampered constants.

use abet_params::chainparams::{
    mainnet, network_profile, regtest, testnet, unittest, Checkpoint, CheckpointTable, NetworkId,
    NetworkProfile, ParamsError,
};
use abet_params::constants::ONE_WEEK;
use abet_params::consensus::{compact_to_target, target_to_compact};
use abet_params::crypto::Hash256;
use abet_params::p2p::{materialize, SeedSpec6};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_table() -> CheckpointTable {
    let entries = [0u32, 1_000, 5_000, 20_000]
        .iter()
        .map(|height| Checkpoint {
            height: *height,
            hash: Hash256::from_bytes([(*height % 251) as u8 + 1; 32]),
        })
        .collect();
    CheckpointTable::new(entries, 1_600_000_000, 40_000, 2_880.0).unwrap()
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

proptest! {
    /// Progress never decreases as the chain advances
    #[test]
    fn prop_progress_monotonic(
        height in 0u32..40_000,
        step in 0u32..10_000,
        timestamp in 1_590_000_000i64..1_700_000_000,
        advance in 0i64..10_000_000,
    ) {
        let table = sample_table();
        let now = 1_700_000_000;
        let before = table.estimate_progress(height, timestamp, now);
        let after = table.estimate_progress(height + step, timestamp + advance, now);
        prop_assert!(after >= before);
    }

    /// Progress is a fraction
    #[test]
    fn prop_progress_bounded(
        height in any::<u32>(),
        timestamp in any::<i32>(),
        now in any::<i32>(),
    ) {
        let table = sample_table();
        let progress = table.estimate_progress(height, i64::from(timestamp), i64::from(now));
        prop_assert!((0.0..=1.0).contains(&progress));
    }

    /// Lookup finds anchors exactly
    #[test]
    fn prop_lookup_only_listed_heights(height in any::<u32>()) {
        let table = sample_table();
        let listed = table.entries().iter().find(|c| c.height == height);
        prop_assert_eq!(table.lookup(height), listed.map(|c| c.hash));
    }

    /// Any strictly increasing height list builds; anything else fails
    #[test]
    fn prop_table_requires_increasing_heights(
        heights in prop::collection::vec(0u32..1_000, 0..20),
    ) {
        let entries: Vec<Checkpoint> = heights
            .iter()
            .map(|h| Checkpoint { height: *h, hash: Hash256::zero() })
            .collect();
        let increasing = heights.windows(2).all(|w| w[0] < w[1]);
        let result = CheckpointTable::new(entries, 0, 0, 0.0);
        prop_assert_eq!(result.is_ok(), increasing);
    }

    /// Seed timestamps fall in the one-to-two-weeks-ago window
    #[test]
    fn prop_materialize_window(
        addrs in prop::collection::vec((any::<[u8; 16]>(), any::<u16>()), 0..50),
        now in 1_000_000_000i64..4_000_000_000,
        seed in any::<u64>(),
    ) {
        let specs: Vec<SeedSpec6> = addrs
            .iter()
            .map(|(addr, port)| SeedSpec6 { addr: *addr, port: *port })
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let seeds = materialize(&specs, now, &mut rng);

        prop_assert_eq!(seeds.len(), specs.len());
        for (seed, spec) in seeds.iter().zip(specs.iter()) {
            prop_assert_eq!(seed.ip.octets(), spec.addr);
            prop_assert_eq!(seed.port, spec.port);
            prop_assert!(seed.last_seen >= now - 2 * ONE_WEEK);
            prop_assert!(seed.last_seen < now - ONE_WEEK);
        }
    }

    /// Valid compact encodings survive a round trip through the target
    #[test]
    fn prop_compact_round_trip(size in 3u32..=32, mantissa in 0x010000u32..0x800000) {
        let compact = (size << 24) | mantissa;
        let target = compact_to_target(compact).unwrap();
        prop_assert_eq!(target_to_compact(&target), compact);
    }
}

// ============================================================================
// ADVERSARIAL TESTS
// ============================================================================

/// Every network verifies against the same genesis constants
#[test]
fn test_every_network_genesis() {
    for id in NetworkId::ALL {
        let built = network_profile(id);
        assert_eq!(built.id(), id);
        assert_eq!(
            built.genesis_hash(),
            "0x852bf462534c29c0039513f244dd9b80a581f7cddf81214fe4236b3866c4d41d"
                .parse::<Hash256>()
                .unwrap()
        );
        assert_eq!(
            built.genesis().merkle_root.to_hex(),
            "73b17d2797b7b4d0a6fe09204aa736b6c1d290d3a6a6f944b7eab02f7029d0af"
        );
    }
}

/// Checkpoint tables of all networks are strictly ordered
#[test]
fn test_every_network_checkpoints_ordered() {
    for id in NetworkId::ALL {
        let built = network_profile(id);
        let heights: Vec<u32> = built.checkpoints().entries().iter().map(|c| c.height).collect();
        assert!(!heights.is_empty());
        assert!(heights.windows(2).all(|w| w[0] < w[1]));
    }
}

/// Tampering with any genesis input is caught at build time
#[test]
fn test_tampered_genesis_rejected() {
    let mut template = regtest::TEMPLATE;
    template.genesis.time += 1;
    assert!(matches!(
        NetworkProfile::build(&template),
        Err(ParamsError::GenesisHashMismatch { network: NetworkId::RegTest, .. })
    ));

    let mut template = unittest::TEMPLATE;
    template.genesis.reward += 1;
    assert!(matches!(
        NetworkProfile::build(&template),
        Err(ParamsError::MerkleRootMismatch { network: NetworkId::UnitTest, .. })
    ));

    let mut template = mainnet::TEMPLATE;
    template.genesis.expected_hash = "0xnothex";
    assert!(matches!(
        NetworkProfile::build(&template),
        Err(ParamsError::InvalidHash { .. })
    ));
}

/// Derived networks override only what they declare
#[test]
fn test_override_inheritance() {
    let main = network_profile(NetworkId::Main);
    let test = network_profile(NetworkId::Test);
    let reg = network_profile(NetworkId::RegTest);
    let unit = network_profile(NetworkId::UnitTest);

    assert_eq!(test.magic(), [0x41, 0x4d, 0x5e, 0x78]);
    assert_eq!(test.consensus().max_reorganization_depth, 100);
    assert_eq!(test.economics().budget_fee_confirmations, 6);
    assert_eq!(test.spork().old_key_hex(), main.spork().old_key_hex());
    assert_eq!(test.obfuscation_pool_dummy_address(), main.obfuscation_pool_dummy_address());
    assert!(test.fixed_seeds().is_empty());
    assert!(test.dns_seeds().is_empty());

    assert_eq!(reg.default_port(), 39793);
    assert_eq!(reg.base58(), test.base58());
    assert_eq!(reg.economics(), test.economics());
    assert_eq!(reg.alert_key_hex(), test.alert_key_hex());
    assert_eq!(reg.consensus().modifier_update_block, 51197);
    assert!(reg.flags().mine_blocks_on_demand);

    assert_eq!(unit.default_port(), 39791);
    assert_eq!(unit.magic(), main.magic());
    assert_eq!(unit.consensus(), main.consensus());
    assert_eq!(unit.checkpoints(), main.checkpoints());
    assert!(unit.fixed_seeds().is_empty());
    assert!(unit.flags().default_consistency_checks);
    assert!(!unit.flags().mining_requires_peers);

    assert_eq!(testnet::TEMPLATE.genesis.nonce, mainnet::TEMPLATE.genesis.nonce);
}

/// A checkpoint mismatch flags a competing history
#[test]
fn test_checkpoint_rejects_forked_block() {
    let main = network_profile(NetworkId::Main);
    let table = main.checkpoints();
    let anchor = table.lookup(4000).unwrap();
    assert!(table.check_block(4000, &anchor));
    assert!(!table.check_block(4000, &main.genesis_hash()));
    assert!(table.check_block(4001, &main.genesis_hash()));
    assert_eq!(table.highest_height(), 21500);
}
