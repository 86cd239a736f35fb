//! In-process unit test network constants, derived from main
//!
//! Shares main's checkpoints. The only network whose flags and upgrade
//! thresholds may be changed after selection.

use super::mainnet;
use super::profile::{FeatureFlags, ProfileTemplate};
use super::NetworkId;

pub const TEMPLATE: ProfileTemplate = ProfileTemplate {
    id: NetworkId::UnitTest,
    default_port: 39791,
    flags: FeatureFlags {
        mining_requires_peers: false,
        default_consistency_checks: true,
        allow_min_difficulty_blocks: false,
        mine_blocks_on_demand: true,
        ..mainnet::TEMPLATE.flags
    },
    dns_seeds: &[],
    fixed_seeds: &[],
    ..mainnet::TEMPLATE
};
