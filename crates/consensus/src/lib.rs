//! Network profiles, checkpoints, and banned inputs.

pub mod banned;
pub mod checkpoints;
pub mod money;
pub mod network;
pub mod params;
pub mod seeds;

pub use banned::{BannedInput, BannedInputSet};
pub use checkpoints::{CheckpointData, CheckpointError, CheckpointSummary, CheckpointTable};
pub use network::Network;
pub use params::{
    decode_hex, hash256_from_hex, hash256_to_hex, profile_for, profile_for_at, Base58Prefixes,
    ChainFlags, ConsensusParams, GenesisParams, GovernanceParams, Hash256, HexError,
    NetworkProfile,
};
pub use seeds::{DnsSeed, SeedAddress, SeedSpec};
