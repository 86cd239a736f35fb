//! Network parameter errors

use super::NetworkId;
use crate::crypto::Hash256;
use thiserror::Error;

/// Errors raised while building or selecting network parameters
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    #[error("Conflicting network selection: {0:?}")]
    ConflictingNetworks(Vec<NetworkId>),
    #[error("No network parameters selected")]
    NotSelected,
    #[error("Parameters for {0} are not modifiable")]
    NotModifiable(NetworkId),
    #[error("{network} genesis hash mismatch: expected {expected}, computed {computed}")]
    GenesisHashMismatch {
        network: NetworkId,
        expected: Hash256,
        computed: Hash256,
    },
    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {computed}")]
    MerkleRootMismatch {
        network: NetworkId,
        expected: Hash256,
        computed: Hash256,
    },
    #[error("{network} genesis bits {bits:#010x} exceed the proof-of-work limit")]
    GenesisTargetAbovePowLimit { network: NetworkId, bits: u32 },
    #[error("Invalid hash literal {literal:?}: {source}")]
    InvalidHash {
        literal: String,
        source: hex::FromHexError,
    },
    #[error("Checkpoint height {height} does not follow {previous}")]
    CheckpointOrder { previous: u32, height: u32 },
    #[error("Invalid {role} key: {reason}")]
    InvalidGovernanceKey { role: &'static str, reason: String },
    #[error("Invalid zerocoin modulus")]
    InvalidZerocoinModulus,
    #[error("Invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: &'static str },
}

/// Parse a display-order hash literal
pub(crate) fn parse_hash(literal: &str) -> Result<Hash256, ParamsError> {
    Hash256::from_hex(literal).map_err(|source| ParamsError::InvalidHash {
        literal: literal.to_string(),
        source,
    })
}
