//! One verified [`ChainParams`] per network, built once.

use std::sync::Arc;

use rand::Rng;
use trbod_consensus::{hash256_to_hex, profile_for, profile_for_at, Network, NetworkProfile};
use trbod_log::log_debug;
use trbod_pow::genesis::verify_genesis;
use trbod_primitives::block::Block;

use crate::error::ParamsError;

/// A network profile together with the genesis block it was verified against.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainParams {
    profile: NetworkProfile,
    genesis: Block,
}

impl ChainParams {
    /// Builds the profile's genesis block and checks it against the pinned
    /// hash and merkle root.
    pub fn from_profile(profile: NetworkProfile) -> Result<Self, ParamsError> {
        let genesis = verify_genesis(&profile.genesis).map_err(|error| ParamsError::Genesis {
            network: profile.network,
            error,
        })?;
        log_debug!(
            "{} genesis verified: hash {} merkle {} time {} bits {:#010x} nonce {}",
            profile.network,
            hash256_to_hex(&genesis.hash()),
            hash256_to_hex(&genesis.header.merkle_root),
            genesis.header.time,
            genesis.header.bits,
            genesis.header.nonce
        );
        Ok(Self { profile, genesis })
    }

    pub fn network(&self) -> Network {
        self.profile.network
    }

    pub fn profile(&self) -> &NetworkProfile {
        &self.profile
    }

    pub(crate) fn profile_mut(&mut self) -> &mut NetworkProfile {
        &mut self.profile
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }
}

#[derive(Clone, Debug)]
pub struct ProfileRegistry {
    main: Arc<ChainParams>,
    test: Arc<ChainParams>,
    regtest: Arc<ChainParams>,
    unittest: Arc<ChainParams>,
}

impl ProfileRegistry {
    /// Builds and verifies all four profiles against the wall clock.
    pub fn new() -> Result<Self, ParamsError> {
        Self::from_builder(profile_for)
    }

    /// Same as [`ProfileRegistry::new`] with a fixed clock and randomness for
    /// the fallback seed timestamps.
    pub fn new_at<R: Rng + ?Sized>(now: i64, rng: &mut R) -> Result<Self, ParamsError> {
        Self::from_builder(|network| profile_for_at(network, now, rng))
    }

    fn from_builder(
        mut build: impl FnMut(Network) -> NetworkProfile,
    ) -> Result<Self, ParamsError> {
        let mut verified = |network| ChainParams::from_profile(build(network)).map(Arc::new);
        Ok(Self {
            main: verified(Network::Main)?,
            test: verified(Network::Test)?,
            regtest: verified(Network::Regtest)?,
            unittest: verified(Network::UnitTest)?,
        })
    }

    pub fn get(&self, network: Network) -> Arc<ChainParams> {
        match network {
            Network::Main => Arc::clone(&self.main),
            Network::Test => Arc::clone(&self.test),
            Network::Regtest => Arc::clone(&self.regtest),
            Network::UnitTest => Arc::clone(&self.unittest),
        }
    }

    pub fn get_by_name(&self, name: &str) -> Result<Arc<ChainParams>, ParamsError> {
        Network::parse(name)
            .map(|network| self.get(network))
            .ok_or_else(|| ParamsError::UnknownNetwork(name.to_string()))
    }
}
