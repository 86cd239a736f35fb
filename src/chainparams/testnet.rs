//! Public test network constants, derived from main

use super::address::Base58Prefixes;
use super::checkpoints::CheckpointData;
use super::mainnet;
use super::profile::{ConsensusParams, Economics, FeatureFlags, ProfileTemplate, NEVER};
use super::spork::SporkTemplate;
use super::zerocoin::ZerocoinTemplate;
use super::NetworkId;
use crate::constants::COIN;

pub const CHECKPOINTS: CheckpointData = CheckpointData {
    checkpoints: &[(0, "0x1")],
    last_checkpoint_time: 1561995372,
    transactions_at_last_checkpoint: 0,
    transactions_per_day: 250.0,
};

pub const TEMPLATE: ProfileTemplate = ProfileTemplate {
    id: NetworkId::Test,
    magic: [0x41, 0x4d, 0x5e, 0x78],
    alert_key: "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f",
    default_port: 39795,
    consensus: ConsensusParams {
        enforce_block_upgrade_majority: 51,
        reject_block_outdated_majority: 75,
        to_check_block_upgrade_majority: 100,
        miner_threads: 0,
        target_timespan: 60,
        target_spacing: 60,
        last_pow_block: 200,
        maturity: 1,
        modifier_update_block: 51197,
        ..mainnet::TEMPLATE.consensus
    },
    economics: Economics {
        max_money_out: 43_199_500 * COIN,
        min_stake_input: 15 * COIN,
        masternode_collateral: 1_000,
        masternode_collateral_new: 5_000,
        masternode_count_drift: 4,
        pool_max_transactions: 2,
        start_masternode_payments: 1561995372,
        ..mainnet::TEMPLATE.economics
    },
    base58: Base58Prefixes {
        pubkey_address: 139,
        script_address: 19,
        secret_key: 239,
        ext_public_key: [0x3a, 0x80, 0x61, 0xa0],
        ext_secret_key: [0x3a, 0x80, 0x58, 0x37],
        ext_coin_type: [0x80, 0x00, 0x00, 0x01],
    },
    bech32_hrp: "tv",
    flags: FeatureFlags {
        mining_requires_peers: false,
        allow_min_difficulty_blocks: true,
        default_consistency_checks: false,
        require_standard: false,
        mine_blocks_on_demand: false,
        testnet_to_be_deprecated_field_rpc: false,
        ..mainnet::TEMPLATE.flags
    },
    spork: SporkTemplate {
        key: "023bdfaa1671a451ebb3fdf4978c7336ce9283f35733006bfe059da6cd195ecf69",
        ..mainnet::TEMPLATE.spork
    },
    zerocoin: ZerocoinTemplate {
        start_height: NEVER,
        last_old_params: NEVER,
        ..mainnet::TEMPLATE.zerocoin
    },
    dns_seeds: &[],
    fixed_seeds: &[],
    checkpoints: CHECKPOINTS,
    ..mainnet::TEMPLATE
};
