//! Local regression test network constants, derived from test

use super::checkpoints::CheckpointData;
use super::profile::{ConsensusParams, FeatureFlags, ProfileTemplate};
use super::spork::SporkTemplate;
use super::testnet;
use super::zerocoin::ZerocoinTemplate;
use super::NetworkId;

pub const CHECKPOINTS: CheckpointData = CheckpointData {
    checkpoints: &[(0, "0x001")],
    last_checkpoint_time: 1561995372,
    transactions_at_last_checkpoint: 0,
    transactions_per_day: 100.0,
};

pub const TEMPLATE: ProfileTemplate = ProfileTemplate {
    id: NetworkId::RegTest,
    magic: [0x2d, 0x53, 0x6f, 0x40],
    default_port: 39793,
    consensus: ConsensusParams {
        pow_limit_shift: 1,
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        miner_threads: 1,
        target_timespan: 24 * 60 * 60,
        target_spacing: 60,
        maturity: 0,
        // proof of stake timing does not suit local block generation
        last_pow_block: 999_999_999,
        ..testnet::TEMPLATE.consensus
    },
    flags: FeatureFlags {
        mining_requires_peers: false,
        allow_min_difficulty_blocks: true,
        default_consistency_checks: true,
        require_standard: false,
        mine_blocks_on_demand: true,
        testnet_to_be_deprecated_field_rpc: false,
        ..testnet::TEMPLATE.flags
    },
    spork: SporkTemplate {
        key: "04cded1204a57acd6280c8499b7a2df052609dbf96546453984d632204d651d72a37013edc9d115e5a385e100eb7e867923fdd0bb7d9dc31aa1eb9d59b00c76697",
        ..testnet::TEMPLATE.spork
    },
    zerocoin: ZerocoinTemplate {
        start_height: 100,
        last_old_params: 499,
        ..testnet::TEMPLATE.zerocoin
    },
    dns_seeds: &[],
    fixed_seeds: &[],
    checkpoints: CHECKPOINTS,
    ..testnet::TEMPLATE
};
