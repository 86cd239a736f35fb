//! Active network selection
//!
//! The four profiles are built and verified lazily, once per process. A
//! [`ProfileRegistry`] holds the single active profile as an `Arc`, so a
//! reselection swaps the whole profile at once and readers keep whatever
//! snapshot they already hold.

use super::profile::NetworkProfile;
use super::{mainnet, regtest, testnet, unittest, NetworkId, ParamsError, ProfileTemplate};
use crate::config::NetworkSelection;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{error, info};

static MAIN: Lazy<Arc<NetworkProfile>> = Lazy::new(|| prebuilt(&mainnet::TEMPLATE));
static TEST: Lazy<Arc<NetworkProfile>> = Lazy::new(|| prebuilt(&testnet::TEMPLATE));
static REGTEST: Lazy<Arc<NetworkProfile>> = Lazy::new(|| prebuilt(&regtest::TEMPLATE));
static UNITTEST: Lazy<Arc<NetworkProfile>> = Lazy::new(|| prebuilt(&unittest::TEMPLATE));

static REGISTRY: Lazy<ProfileRegistry> = Lazy::new(ProfileRegistry::new);

/// Compiled-in profiles must verify; a node cannot run on untrusted constants.
fn prebuilt(template: &ProfileTemplate) -> Arc<NetworkProfile> {
    match NetworkProfile::build(template) {
        Ok(profile) => Arc::new(profile),
        Err(err) => {
            error!(network = %template.id, error = %err, "Network parameters failed verification");
            panic!("{} network parameters failed verification: {}", template.id, err);
        }
    }
}

/// The pre-built profile for `id`, without selecting it
pub fn network_profile(id: NetworkId) -> Arc<NetworkProfile> {
    match id {
        NetworkId::Main => Arc::clone(&MAIN),
        NetworkId::Test => Arc::clone(&TEST),
        NetworkId::RegTest => Arc::clone(&REGTEST),
        NetworkId::UnitTest => Arc::clone(&UNITTEST),
    }
}

/// Holder of the active network profile
#[derive(Debug, Default)]
pub struct ProfileRegistry {
    active: RwLock<Option<Arc<NetworkProfile>>>,
}

impl ProfileRegistry {
    /// Create a registry with no network selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `id` the active network
    pub fn select(&self, id: NetworkId) -> Arc<NetworkProfile> {
        let selected = network_profile(id);
        *self.active.write() = Some(Arc::clone(&selected));
        info!(
            network = %id,
            port = selected.default_port(),
            genesis = %selected.genesis_hash(),
            "Selected network parameters"
        );
        selected
    }

    /// Parse a network token and select it
    pub fn select_by_name(&self, name: &str) -> Result<Arc<NetworkProfile>, ParamsError> {
        let id: NetworkId = name.parse()?;
        Ok(self.select(id))
    }

    /// Resolve command-line style options and select the result
    pub fn select_from(
        &self,
        selection: &NetworkSelection,
    ) -> Result<Arc<NetworkProfile>, ParamsError> {
        let id = selection.resolve()?;
        Ok(self.select(id))
    }

    /// The active profile
    pub fn active(&self) -> Result<Arc<NetworkProfile>, ParamsError> {
        self.active.read().clone().ok_or(ParamsError::NotSelected)
    }

    pub fn is_selected(&self) -> bool {
        self.active.read().is_some()
    }

    /// Mutation handle, available only while the unit test network is active
    pub fn modifiable(&self) -> Result<ModifiableParams<'_>, ParamsError> {
        let active = self.active()?;
        if active.id() != NetworkId::UnitTest {
            return Err(ParamsError::NotModifiable(active.id()));
        }
        Ok(ModifiableParams { registry: self })
    }
}

/// Setters for the unit test network.
///
/// Each setter replaces the active profile with an updated copy.
/// Reselecting the unit test network restores its compiled-in values.
#[derive(Debug)]
pub struct ModifiableParams<'a> {
    registry: &'a ProfileRegistry,
}

impl ModifiableParams<'_> {
    fn update<F>(&self, apply: F) -> Result<(), ParamsError>
    where
        F: FnOnce(&mut NetworkProfile),
    {
        let mut active = self.registry.active.write();
        let current = active.as_ref().ok_or(ParamsError::NotSelected)?;
        if current.id() != NetworkId::UnitTest {
            return Err(ParamsError::NotModifiable(current.id()));
        }

        let mut updated = NetworkProfile::clone(current);
        apply(&mut updated);
        *active = Some(Arc::new(updated));
        Ok(())
    }

    pub fn set_enforce_block_upgrade_majority(&self, value: u32) -> Result<(), ParamsError> {
        self.update(|p| p.consensus_mut().enforce_block_upgrade_majority = value)
    }

    pub fn set_reject_block_outdated_majority(&self, value: u32) -> Result<(), ParamsError> {
        self.update(|p| p.consensus_mut().reject_block_outdated_majority = value)
    }

    pub fn set_to_check_block_upgrade_majority(&self, value: u32) -> Result<(), ParamsError> {
        self.update(|p| p.consensus_mut().to_check_block_upgrade_majority = value)
    }

    pub fn set_default_consistency_checks(&self, value: bool) -> Result<(), ParamsError> {
        self.update(|p| p.flags_mut().default_consistency_checks = value)
    }

    pub fn set_allow_min_difficulty_blocks(&self, value: bool) -> Result<(), ParamsError> {
        self.update(|p| p.flags_mut().allow_min_difficulty_blocks = value)
    }

    pub fn set_skip_proof_of_work_check(&self, value: bool) -> Result<(), ParamsError> {
        self.update(|p| p.flags_mut().skip_proof_of_work_check = value)
    }
}

/// The process-wide registry
pub fn global_registry() -> &'static ProfileRegistry {
    &REGISTRY
}

/// Select the process-wide active network
pub fn select_params(id: NetworkId) -> Arc<NetworkProfile> {
    REGISTRY.select(id)
}

/// Select the process-wide active network from command-line style options
pub fn select_params_from(selection: &NetworkSelection) -> Result<Arc<NetworkProfile>, ParamsError> {
    REGISTRY.select_from(selection)
}

/// The process-wide active network.
///
/// # Panics
///
/// Panics if no network has been selected.
pub fn params() -> Arc<NetworkProfile> {
    REGISTRY.active().unwrap_or_else(|err| fatal(err))
}

/// Mutation handle for the process-wide unit test network.
///
/// # Panics
///
/// Panics unless the unit test network is active.
pub fn modifiable_params() -> ModifiableParams<'static> {
    REGISTRY.modifiable().unwrap_or_else(|err| fatal(err))
}

fn fatal(err: ParamsError) -> ! {
    error!(error = %err, "Invalid access to network parameters");
    panic!("{}", err);
}
