//! Profile registry and network selection
//!
//! A [`ParamsRegistry`] owns one lazily built profile per network and the
//! process's single active selection. Profiles build at most once; a failed
//! build is remembered and reported on every later request.
//!
//! The process-wide registry behind [`select_params`] and [`params`] is what
//! the node uses. Tests that need isolation construct their own registry.

use once_cell::sync::{Lazy, OnceCell};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info};

use super::chain::ChainParams;
use super::networks::{MAIN_PARAMS, REGTEST_PARAMS, TESTNET_PARAMS, UNITTEST_PARAMS};
use super::{NetworkId, NetworkProfile, ProfileError, RegistryError};

/// Lifecycle of one network's profile
///
/// `Unbuilt -> Building -> Built | Failed`, with no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BuildState {
    Unbuilt,
    Building,
    Built,
    Failed,
}

/// Per-network profile slots plus the active selection
#[derive(Debug)]
pub struct ParamsRegistry {
    declarations: [ChainParams; 4],
    profiles: [OnceCell<Result<NetworkProfile, ProfileError>>; 4],
    /// Set when a build starts and never cleared; a filled cell wins
    building: [AtomicBool; 4],
    active: OnceCell<NetworkId>,
}

impl Default for ParamsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamsRegistry {
    /// Registry over the built-in network declarations
    pub fn new() -> Self {
        Self::from_declarations([MAIN_PARAMS, TESTNET_PARAMS, REGTEST_PARAMS, UNITTEST_PARAMS])
    }

    /// Registry over custom declarations, indexed by their `network_id`
    ///
    /// A later declaration for the same network replaces an earlier one.
    pub fn from_declarations(declarations: [ChainParams; 4]) -> Self {
        let mut slots = [MAIN_PARAMS, TESTNET_PARAMS, REGTEST_PARAMS, UNITTEST_PARAMS];
        for declaration in declarations {
            slots[declaration.network_id.index()] = declaration;
        }
        Self {
            declarations: slots,
            profiles: Default::default(),
            building: Default::default(),
            active: OnceCell::new(),
        }
    }

    /// The declaration a network's profile is built from
    pub fn declaration(&self, id: NetworkId) -> &ChainParams {
        &self.declarations[id.index()]
    }

    /// Profile for `id`, building it on first request
    ///
    /// Does not change the selection. Concurrent first callers wait for a
    /// single build.
    pub fn profile_for(&self, id: NetworkId) -> Result<&NetworkProfile, ProfileError> {
        self.profiles[id.index()]
            .get_or_init(|| {
                self.building[id.index()].store(true, Ordering::Release);
                let built = NetworkProfile::build(self.declaration(id));
                if let Err(e) = &built {
                    error!(network = %id, error = %e, "Network profile failed to build");
                }
                built
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn build_state(&self, id: NetworkId) -> BuildState {
        match self.profiles[id.index()].get() {
            Some(Ok(_)) => BuildState::Built,
            Some(Err(_)) => BuildState::Failed,
            None if self.building[id.index()].load(Ordering::Acquire) => BuildState::Building,
            None => BuildState::Unbuilt,
        }
    }

    /// Make `id` the active network
    ///
    /// Selecting the active network again is a no-op. Selecting a different
    /// one fails without building it, and a profile that does not build fails.
    pub fn select(&self, id: NetworkId) -> Result<&NetworkProfile, RegistryError> {
        if let Some(&active) = self.active.get() {
            if active != id {
                return Err(RegistryError::ConflictingSelection {
                    active,
                    requested: id,
                });
            }
        }

        let profile = self.profile_for(id)?;
        // A concurrent select may have won since the check above
        let active = *self.active.get_or_init(|| {
            info!(network = %id, port = profile.default_port(), "Selected network");
            id
        });
        if active != id {
            return Err(RegistryError::ConflictingSelection {
                active,
                requested: id,
            });
        }
        Ok(profile)
    }

    pub fn active_network(&self) -> Option<NetworkId> {
        self.active.get().copied()
    }

    /// The active profile, or an error before selection
    pub fn try_active(&self) -> Result<&NetworkProfile, RegistryError> {
        let id = self.active.get().ok_or(RegistryError::NotSelected)?;
        Ok(self.profile_for(*id)?)
    }

    /// The active profile
    ///
    /// # Panics
    ///
    /// Reading parameters before a network is selected is a startup bug and
    /// aborts.
    pub fn active(&self) -> &NetworkProfile {
        match self.try_active() {
            Ok(profile) => profile,
            Err(e) => panic!("{e}"),
        }
    }

    /// Mutable view of the active profile; unit-test network only
    pub fn as_mutable(&self) -> Result<MutableNetworkProfile<'_>, RegistryError> {
        let profile = self.try_active()?;
        match profile.network_id() {
            NetworkId::UnitTest => Ok(MutableNetworkProfile { profile }),
            active => Err(RegistryError::NotUnitTest { active }),
        }
    }
}

/// Setters for the unit-test network's consensus switches
///
/// Only [`ParamsRegistry::as_mutable`] hands these out. Stores are not
/// synchronized with readers beyond atomicity; change switches during
/// single-threaded test setup.
#[derive(Debug, Clone, Copy)]
pub struct MutableNetworkProfile<'a> {
    profile: &'a NetworkProfile,
}

impl<'a> MutableNetworkProfile<'a> {
    pub fn profile(&self) -> &'a NetworkProfile {
        self.profile
    }

    pub fn set_enforce_block_upgrade_majority(&self, value: u32) {
        self.profile.set_enforce_block_upgrade_majority(value);
    }

    pub fn set_reject_block_outdated_majority(&self, value: u32) {
        self.profile.set_reject_block_outdated_majority(value);
    }

    pub fn set_to_check_block_upgrade_majority(&self, value: u32) {
        self.profile.set_to_check_block_upgrade_majority(value);
    }

    pub fn set_default_consistency_checks(&self, value: bool) {
        self.profile.set_default_consistency_checks(value);
    }

    pub fn set_allow_min_difficulty_blocks(&self, value: bool) {
        self.profile.set_allow_min_difficulty_blocks(value);
    }

    pub fn set_skip_proof_of_work_check(&self, value: bool) {
        self.profile.set_skip_proof_of_work_check(value);
    }
}

static REGISTRY: Lazy<ParamsRegistry> = Lazy::new(ParamsRegistry::new);

/// Select the process-wide network; call once at startup
pub fn select_params(id: NetworkId) -> Result<&'static NetworkProfile, RegistryError> {
    REGISTRY.select(id)
}

/// The process-wide active profile
///
/// # Panics
///
/// Panics if [`select_params`] has not been called.
pub fn params() -> &'static NetworkProfile {
    REGISTRY.active()
}

/// A network's profile without changing the process-wide selection
pub fn params_for(id: NetworkId) -> Result<&'static NetworkProfile, ProfileError> {
    REGISTRY.profile_for(id)
}

/// Setters for the process-wide unit-test profile
pub fn modifiable_params() -> Result<MutableNetworkProfile<'static>, RegistryError> {
    REGISTRY.as_mutable()
}
