//! Active-network selection.
//!
//! The host selects a network once at startup and hands the resulting
//! [`ChainContext`] to everything that needs consensus parameters. Only the
//! unit-test network can be modified after selection, through
//! [`UnitTestParams`], which owns its own copy of the parameters.

use std::sync::Arc;

use trbod_consensus::{
    ChainFlags, CheckpointTable, ConsensusParams, Hash256, Network, NetworkProfile,
};
use trbod_log::log_info;
use trbod_primitives::block::Block;

use crate::error::ParamsError;
use crate::registry::{ChainParams, ProfileRegistry};

/// Read-only view of the selected network's parameters. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ChainContext {
    params: Arc<ChainParams>,
}

impl ChainContext {
    pub fn new(params: Arc<ChainParams>) -> Self {
        Self { params }
    }

    pub fn network(&self) -> Network {
        self.params.network()
    }

    pub fn profile(&self) -> &NetworkProfile {
        self.params.profile()
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.profile().consensus
    }

    pub fn flags(&self) -> &ChainFlags {
        &self.profile().flags
    }

    pub fn genesis_block(&self) -> &Block {
        self.params.genesis_block()
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.profile().genesis.expected_hash
    }

    pub fn checkpoints(&self) -> &CheckpointTable {
        &self.profile().checkpoints
    }

    /// Whether spending output `vout` of `txid` is forbidden on this network.
    pub fn is_banned(&self, txid: &Hash256, vout: u32) -> bool {
        self.profile().is_banned(txid, vout)
    }
}

/// Mutable unit-test parameters.
///
/// Writes go to a private copy, so contexts handed out earlier (and the
/// registry) keep the values they had.
#[derive(Clone, Debug)]
pub struct UnitTestParams {
    context: ChainContext,
}

impl UnitTestParams {
    fn new(context: ChainContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &ChainContext {
        &self.context
    }

    fn profile_mut(&mut self) -> &mut NetworkProfile {
        Arc::make_mut(&mut self.context.params).profile_mut()
    }

    pub fn set_enforce_block_upgrade_majority(&mut self, value: i32) {
        self.profile_mut().consensus.majority_enforce_block_upgrade = value;
    }

    pub fn set_reject_block_outdated_majority(&mut self, value: i32) {
        self.profile_mut().consensus.majority_reject_block_outdated = value;
    }

    pub fn set_to_check_block_upgrade_majority(&mut self, value: i32) {
        self.profile_mut().consensus.majority_window = value;
    }

    pub fn set_default_consistency_checks(&mut self, value: bool) {
        self.profile_mut().flags.default_consistency_checks = value;
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, value: bool) {
        self.profile_mut().flags.allow_min_difficulty_blocks = value;
    }

    pub fn set_skip_proof_of_work_check(&mut self, value: bool) {
        self.profile_mut().flags.skip_proof_of_work_check = value;
    }
}

#[derive(Debug)]
enum Selected {
    Shared(ChainContext),
    UnitTest(UnitTestParams),
}

impl Selected {
    fn context(&self) -> &ChainContext {
        match self {
            Selected::Shared(context) => context,
            Selected::UnitTest(params) => params.context(),
        }
    }
}

pub struct ParameterSelector {
    registry: ProfileRegistry,
    active: Option<Selected>,
}

impl ParameterSelector {
    pub fn new(registry: ProfileRegistry) -> Self {
        Self {
            registry,
            active: None,
        }
    }

    /// Makes `network` the active network. Selecting unittest again discards
    /// earlier modifications.
    pub fn select(&mut self, network: Network) -> &ChainContext {
        let context = ChainContext::new(self.registry.get(network));
        log_info!(
            "selected network {} (port {}, {} checkpoints)",
            network,
            context.profile().default_port,
            context.checkpoints().len()
        );
        let selected = match network {
            Network::UnitTest => Selected::UnitTest(UnitTestParams::new(context)),
            _ => Selected::Shared(context),
        };
        self.active.insert(selected).context()
    }

    pub fn select_by_name(&mut self, name: &str) -> Result<&ChainContext, ParamsError> {
        let network =
            Network::parse(name).ok_or_else(|| ParamsError::UnknownNetwork(name.to_string()))?;
        Ok(self.select(network))
    }

    pub fn context(&self) -> Result<&ChainContext, ParamsError> {
        self.active
            .as_ref()
            .map(Selected::context)
            .ok_or(ParamsError::NotSelected)
    }

    pub fn active(&self) -> Result<&NetworkProfile, ParamsError> {
        self.context().map(ChainContext::profile)
    }

    pub fn active_mutable(&mut self) -> Result<&mut UnitTestParams, ParamsError> {
        match self.active.as_mut() {
            None => Err(ParamsError::NotSelected),
            Some(Selected::UnitTest(params)) => Ok(params),
            Some(Selected::Shared(context)) => Err(ParamsError::NotUnitTest(context.network())),
        }
    }
}
