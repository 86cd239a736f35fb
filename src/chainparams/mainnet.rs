//! Main network constants

use super::address::Base58Prefixes;
use super::checkpoints::CheckpointData;
use super::genesis::GenesisSpec;
use super::profile::{ConsensusParams, Economics, FeatureFlags, ProfileTemplate, NEVER};
use super::spork::SporkTemplate;
use super::zerocoin::ZerocoinTemplate;
use super::NetworkId;
use crate::constants::COIN;
use crate::p2p::{DnsSeed, SeedSpec6};

pub const DEFAULT_PORT: u16 = 8322;

const fn dns(host: &'static str) -> DnsSeed {
    DnsSeed { name: host, host }
}

pub const DNS_SEEDS: [DnsSeed; 16] = [
    dns("140.82.48.162"),
    dns("8.9.36.49"),
    dns("95.179.149.133"),
    dns("108.61.211.2"),
    dns("45.63.85.96"),
    dns("140.82.1.78"),
    dns("140.82.48.162"),
    dns("45.63.88.175"),
    dns("149.28.203.191"),
    dns("116.203.176.91"),
    dns("45.76.11.89"),
    dns("144.202.107.249"),
    dns("136.244.104.7"),
    dns("104.207.148.137"),
    dns("95.216.79.235"),
    dns("144.202.107.249"),
];

pub const FIXED_SEEDS: [SeedSpec6; 14] = [
    SeedSpec6::ipv4([140, 82, 48, 162], DEFAULT_PORT),
    SeedSpec6::ipv4([8, 9, 36, 49], DEFAULT_PORT),
    SeedSpec6::ipv4([95, 179, 149, 133], DEFAULT_PORT),
    SeedSpec6::ipv4([108, 61, 211, 2], DEFAULT_PORT),
    SeedSpec6::ipv4([45, 63, 85, 96], DEFAULT_PORT),
    SeedSpec6::ipv4([140, 82, 1, 78], DEFAULT_PORT),
    SeedSpec6::ipv4([45, 63, 88, 175], DEFAULT_PORT),
    SeedSpec6::ipv4([149, 28, 203, 191], DEFAULT_PORT),
    SeedSpec6::ipv4([116, 203, 176, 91], DEFAULT_PORT),
    SeedSpec6::ipv4([45, 76, 11, 89], DEFAULT_PORT),
    SeedSpec6::ipv4([144, 202, 107, 249], DEFAULT_PORT),
    SeedSpec6::ipv4([136, 244, 104, 7], DEFAULT_PORT),
    SeedSpec6::ipv4([104, 207, 148, 137], DEFAULT_PORT),
    SeedSpec6::ipv4([95, 216, 79, 235], DEFAULT_PORT),
];

pub const CHECKPOINTS: CheckpointData = CheckpointData {
    checkpoints: &[
        (0, "0x852bf462534c29c0039513f244dd9b80a581f7cddf81214fe4236b3866c4d41d"),
        (3900, "0xe4365fdf5eb4fe1e6d3cbc498aa42c560d167698972853b9bac69811a44ce591"),
        (3950, "0x7cef902d8a35d8f2f5ece98e2b248f2c52712713426d8b52b8dfbc1f36b028e2"),
        (4000, "0x368f2f3bdc5db7a940478645b94267595850dd2dbeaac8d1f9f41bdde53ad326"),
        (4240, "0xe74f53edf64c55d0a4ffd6f8e774c3460179b9df0b3c4586ab1168fa92cde639"),
        (10390, "0x732f9f981e12bc92ae553276df45bec79218fb68baaac86f08bd183c2ba3549c"),
        (21500, "0xd58ce6ced3ba2e5fd01cc9dde8dfbc2722de3ed78451e15e1e3811116c9e130b"),
    ],
    last_checkpoint_time: 1564951151,
    transactions_at_last_checkpoint: 0,
    transactions_per_day: 94705.0,
};

/// RSA-2048 challenge number
const ZEROCOIN_MODULUS: &str = concat!(
    "25195908475657893494027183240048398571429282126204032027777137836043662020707595556264018525880784",
    "4069182906412495150821892985591491761845028084891200728449926873928072877767359714183472702618963750149718246911",
    "6507761337985909570009733045974880842840179742910064245869181719511874612151517265463228221686998754918242243363",
    "7259085141865462043576798423387184774447920739934236584823824281198163815010674810451660377306056201619676256133",
    "8441436038339044149526344321901146575444541784240209246165157233507787077498171257724679629263863563732899121548",
    "31438167899885040445364023527381951378636564391212010397122822120720357",
);

pub const TEMPLATE: ProfileTemplate = ProfileTemplate {
    id: NetworkId::Main,
    magic: [0x2a, 0x2b, 0x3e, 0x88],
    alert_key: "0435401a5693de702378a538ad939ea03b5e3b2826f68431ba840df5f418e3f3e8590ba4fb0c36097179bb55ffc4a4e065dc2ff87edb6f3ce4232a71d253ed7fff",
    default_port: DEFAULT_PORT,
    consensus: ConsensusParams {
        pow_limit_shift: 20,
        max_reorganization_depth: 100,
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        miner_threads: 0,
        target_timespan: 60,
        target_spacing: 120,
        last_pow_block: 220,
        maturity: 60,
        modifier_update_block: 1238900,
    },
    economics: Economics {
        max_money_out: 21_000_000 * COIN,
        min_stake_input: 30 * COIN,
        masternode_collateral: 10_000,
        masternode_collateral_new: 15_000,
        masternode_count_drift: 20,
        budget_fee_confirmations: 6,
        pool_max_transactions: 3,
        start_masternode_payments: 1561995372,
    },
    base58: Base58Prefixes {
        pubkey_address: 23,
        script_address: 25,
        secret_key: 33,
        ext_public_key: [0x02, 0x2d, 0x25, 0x33],
        ext_secret_key: [0x02, 0x21, 0x31, 0x2b],
        ext_coin_type: [0x80, 0x00, 0x00, 0x77],
    },
    bech32_hrp: "ab",
    flags: FeatureFlags {
        mining_requires_peers: true,
        allow_min_difficulty_blocks: false,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        skip_proof_of_work_check: false,
        headers_first_syncing_active: false,
        testnet_to_be_deprecated_field_rpc: false,
    },
    spork: SporkTemplate {
        key: "032b46812dedb731d515b4fe28efd6591adcae691f03fb1577f1a6fb1c89f67ba2",
        old_key: "0239efda1c4227d678db60478f4a00bd2b90210805fe3faa91f8edec9f6a545dd1",
        enforce_new_key_time: 1563578985,
        reject_old_key_time: 1563753600,
    },
    obfuscation_pool_dummy_address: "Ab5bNTKMKVJWLTDCwwEEvHH9MzDhxRaL5a",
    zerocoin: ZerocoinTemplate {
        modulus: ZEROCOIN_MODULUS,
        start_height: NEVER,
        last_old_params: NEVER,
    },
    genesis: GenesisSpec {
        version: 1,
        time: 1561995372,
        bits: 504365040,
        nonce: 1271976,
        reward: COIN,
        timestamp: "Winner, winner chicken dinner.",
        output_pubkey: "04e219a879b053d19f67f06f8f0b409d6dd3ce854db1c384c68990474ff1da4e6b2f55dd5ebeb176a8f271a11d898ee5f129066481b0ae8eeaab8d6c4a61d6e2fe",
        expected_hash: "0x852bf462534c29c0039513f244dd9b80a581f7cddf81214fe4236b3866c4d41d",
        expected_merkle_root: "0x73b17d2797b7b4d0a6fe09204aa736b6c1d290d3a6a6f944b7eab02f7029d0af",
    },
    dns_seeds: &DNS_SEEDS,
    fixed_seeds: &FIXED_SEEDS,
    checkpoints: CHECKPOINTS,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixed_seeds_are_distinct_dns_hosts() {
        let hosts: HashSet<&str> = DNS_SEEDS.iter().map(|s| s.host).collect();
        assert_eq!(hosts.len(), FIXED_SEEDS.len());

        for seed in FIXED_SEEDS.iter() {
            let ip = std::net::Ipv6Addr::from(seed.addr).to_ipv4_mapped().unwrap();
            assert!(hosts.contains(ip.to_string().as_str()));
        }
    }

    #[test]
    fn test_checkpoint_zero_is_genesis() {
        assert_eq!(CHECKPOINTS.checkpoints[0].1, TEMPLATE.genesis.expected_hash);
    }
}
