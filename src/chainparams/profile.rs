//! Network profiles
//!
//! A [`ProfileTemplate`] is a plain set of compiled-in constants. Derived
//! networks are written as a template of the more general network with a
//! handful of fields replaced, so every field is always present and an
//! omitted override simply inherits.
//!
//! [`NetworkProfile::build`] turns a template into a verified profile: it
//! rebuilds and checks the genesis block, parses the checkpoint table and the
//! governance keys, and materializes the fixed seeds.

use super::address::{decode_check, Base58Prefixes};
use super::checkpoints::{CheckpointData, CheckpointTable};
use super::error::parse_hash;
use super::genesis::{GenesisInfo, GenesisSpec};
use super::spork::{parse_public_key, SporkParams, SporkTemplate};
use super::zerocoin::{ZerocoinParams, ZerocoinTemplate};
use super::{NetworkId, ParamsError};
use crate::consensus::{compact_to_target, Block};
use crate::crypto::Hash256;
use crate::p2p::{materialize_now, DnsSeed, SeedAddress, SeedSpec6};
use k256::ecdsa::VerifyingKey;
use serde::Serialize;
use tracing::debug;

/// Height used for features that never activate
pub const NEVER: u32 = i32::MAX as u32;

/// Consensus timing and upgrade thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsensusParams {
    /// Proof-of-work limit is `~0 >> pow_limit_shift`
    pub pow_limit_shift: u32,
    pub max_reorganization_depth: u32,
    pub enforce_block_upgrade_majority: u32,
    pub reject_block_outdated_majority: u32,
    pub to_check_block_upgrade_majority: u32,
    pub miner_threads: u32,
    /// Seconds
    pub target_timespan: i64,
    /// Seconds
    pub target_spacing: i64,
    pub last_pow_block: u32,
    /// Coinbase and stake maturity depth
    pub maturity: u32,
    pub modifier_update_block: u32,
}

/// Monetary constants (amounts in base units unless noted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Economics {
    pub max_money_out: i64,
    pub min_stake_input: i64,
    /// Whole coins
    pub masternode_collateral: i64,
    /// Whole coins, after the collateral upgrade
    pub masternode_collateral_new: i64,
    pub masternode_count_drift: u32,
    pub budget_fee_confirmations: u32,
    pub pool_max_transactions: u32,
    pub start_masternode_payments: i64,
}

/// Behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub headers_first_syncing_active: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
}

/// Compiled-in constants for one network
#[derive(Debug, Clone, Copy)]
pub struct ProfileTemplate {
    pub id: NetworkId,
    pub magic: [u8; 4],
    /// Uncompressed alert public key (hex)
    pub alert_key: &'static str,
    pub default_port: u16,
    pub consensus: ConsensusParams,
    pub economics: Economics,
    pub base58: Base58Prefixes,
    pub bech32_hrp: &'static str,
    pub flags: FeatureFlags,
    pub spork: SporkTemplate,
    pub obfuscation_pool_dummy_address: &'static str,
    pub zerocoin: ZerocoinTemplate,
    pub genesis: GenesisSpec,
    pub dns_seeds: &'static [DnsSeed],
    pub fixed_seeds: &'static [SeedSpec6],
    pub checkpoints: CheckpointData,
}

/// Verified, immutable constants for one network
#[derive(Debug, Clone, Serialize)]
pub struct NetworkProfile {
    id: NetworkId,
    magic: [u8; 4],
    alert_key_hex: &'static str,
    #[serde(skip)]
    alert_key: VerifyingKey,
    default_port: u16,
    pow_limit: Hash256,
    consensus: ConsensusParams,
    economics: Economics,
    base58: Base58Prefixes,
    bech32_hrp: &'static str,
    flags: FeatureFlags,
    spork: SporkParams,
    obfuscation_pool_dummy_address: &'static str,
    zerocoin: ZerocoinParams,
    genesis: GenesisInfo,
    #[serde(skip)]
    genesis_block: Block,
    dns_seeds: Vec<DnsSeed>,
    fixed_seeds: Vec<SeedAddress>,
    checkpoints: CheckpointTable,
}

impl NetworkProfile {
    /// Build and verify a profile from its template
    pub fn build(template: &ProfileTemplate) -> Result<Self, ParamsError> {
        let id = template.id;
        let genesis_block = build_verified_genesis(template)?;
        let genesis = GenesisInfo::from_block(&genesis_block, template.genesis.reward);

        let pow_limit = Hash256::max_shr(template.consensus.pow_limit_shift);
        match compact_to_target(genesis.bits) {
            Some(target) if target <= pow_limit => {}
            _ => {
                return Err(ParamsError::GenesisTargetAbovePowLimit {
                    network: id,
                    bits: genesis.bits,
                })
            }
        }
        debug!(network = %id, hash = %genesis.hash, "Genesis block verified");

        let checkpoints = CheckpointTable::from_data(&template.checkpoints)?;
        let alert_key = parse_public_key("alert", template.alert_key)?;
        let spork = SporkParams::new(&template.spork)?;
        let zerocoin = ZerocoinParams::new(&template.zerocoin)?;
        // derived networks keep the main network's pooling address
        decode_check(template.obfuscation_pool_dummy_address)?;

        Ok(Self {
            id,
            magic: template.magic,
            alert_key_hex: template.alert_key,
            alert_key,
            default_port: template.default_port,
            pow_limit,
            consensus: template.consensus,
            economics: template.economics,
            base58: template.base58,
            bech32_hrp: template.bech32_hrp,
            flags: template.flags,
            spork,
            obfuscation_pool_dummy_address: template.obfuscation_pool_dummy_address,
            zerocoin,
            genesis,
            genesis_block,
            dns_seeds: template.dns_seeds.to_vec(),
            fixed_seeds: materialize_now(template.fixed_seeds),
            checkpoints,
        })
    }

    pub fn id(&self) -> NetworkId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Message start bytes
    pub fn magic(&self) -> [u8; 4] {
        self.magic
    }

    pub fn alert_key(&self) -> &VerifyingKey {
        &self.alert_key
    }

    pub fn alert_key_hex(&self) -> &'static str {
        self.alert_key_hex
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn pow_limit(&self) -> Hash256 {
        self.pow_limit
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    pub fn economics(&self) -> &Economics {
        &self.economics
    }

    pub fn base58(&self) -> &Base58Prefixes {
        &self.base58
    }

    pub fn bech32_hrp(&self) -> &'static str {
        self.bech32_hrp
    }

    pub fn flags(&self) -> &FeatureFlags {
        &self.flags
    }

    pub fn spork(&self) -> &SporkParams {
        &self.spork
    }

    pub fn obfuscation_pool_dummy_address(&self) -> &'static str {
        self.obfuscation_pool_dummy_address
    }

    pub fn zerocoin(&self) -> &ZerocoinParams {
        &self.zerocoin
    }

    pub fn genesis(&self) -> &GenesisInfo {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis.hash
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis_block
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[SeedAddress] {
        &self.fixed_seeds
    }

    pub fn checkpoints(&self) -> &CheckpointTable {
        &self.checkpoints
    }

    /// Blocks between difficulty retargets
    pub fn retarget_interval(&self) -> i64 {
        self.consensus.target_timespan / self.consensus.target_spacing
    }

    /// Whether `value` is a valid amount on this network
    pub fn money_range(&self, value: i64) -> bool {
        (0..=self.economics.max_money_out).contains(&value)
    }

    pub(super) fn consensus_mut(&mut self) -> &mut ConsensusParams {
        &mut self.consensus
    }

    pub(super) fn flags_mut(&mut self) -> &mut FeatureFlags {
        &mut self.flags
    }
}

/// Rebuild the genesis block and compare it with the declared constants
fn build_verified_genesis(template: &ProfileTemplate) -> Result<Block, ParamsError> {
    let spec = &template.genesis;
    let output_pubkey =
        hex::decode(spec.output_pubkey).map_err(|source| ParamsError::InvalidHash {
            literal: spec.output_pubkey.to_string(),
            source,
        })?;
    let block = spec.build_block(&output_pubkey);

    let expected = parse_hash(spec.expected_merkle_root)?;
    let computed = block.header.merkle_root;
    if computed != expected {
        return Err(ParamsError::MerkleRootMismatch {
            network: template.id,
            expected,
            computed,
        });
    }

    let expected = parse_hash(spec.expected_hash)?;
    let computed = block.hash();
    if computed != expected {
        return Err(ParamsError::GenesisHashMismatch {
            network: template.id,
            expected,
            computed,
        });
    }

    Ok(block)
}
