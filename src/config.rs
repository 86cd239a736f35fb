//! Network selection options
//!
//! Mirrors the command-line surface: an explicit network name, or one of the
//! `testnet` / `regtest` / `unittest` switches. Nothing set means main.

use crate::chainparams::{NetworkId, ParamsError};
use serde::{Deserialize, Serialize};

/// Requested network, before resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSelection {
    /// Explicit network name, takes precedence over the switches
    pub network: Option<String>,
    pub testnet: bool,
    pub regtest: bool,
    pub unittest: bool,
}

impl NetworkSelection {
    /// Resolve to a single network
    pub fn resolve(&self) -> Result<NetworkId, ParamsError> {
        if let Some(name) = &self.network {
            return name.parse();
        }

        let requested: Vec<NetworkId> = [
            (self.testnet, NetworkId::Test),
            (self.regtest, NetworkId::RegTest),
            (self.unittest, NetworkId::UnitTest),
        ]
        .into_iter()
        .filter_map(|(set, id)| set.then_some(id))
        .collect();

        match requested.as_slice() {
            [] => Ok(NetworkId::Main),
            [id] => Ok(*id),
            _ => Err(ParamsError::ConflictingNetworks(requested)),
        }
    }
}
