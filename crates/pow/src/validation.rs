use primitive_types::U256;
use trbod_consensus::NetworkProfile;
use trbod_primitives::block::BlockHeader;

use crate::difficulty::{compact_to_u256, CompactError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowError {
    InvalidBits(&'static str),
    HashMismatch,
    Compact(CompactError),
}

impl std::fmt::Display for PowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowError::InvalidBits(message) => write!(f, "{message}"),
            PowError::HashMismatch => write!(f, "pow hash does not meet target"),
            PowError::Compact(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PowError {}

impl From<CompactError> for PowError {
    fn from(err: CompactError) -> Self {
        PowError::Compact(err)
    }
}

/// Checks `header.bits` against the profile's limit and, unless the profile
/// skips proof-of-work checks, that the header hash meets its own target.
pub fn validate_pow_header(header: &BlockHeader, profile: &NetworkProfile) -> Result<(), PowError> {
    let target = compact_to_u256(header.bits)?;
    if target.is_zero() {
        return Err(PowError::InvalidBits("pow target is zero"));
    }

    let pow_limit = U256::from_little_endian(&profile.consensus.pow_limit);
    if target > pow_limit {
        return Err(PowError::InvalidBits("pow target above limit"));
    }

    if profile.flags.skip_proof_of_work_check {
        return Ok(());
    }

    if U256::from_little_endian(&header.hash()) > target {
        return Err(PowError::HashMismatch);
    }

    Ok(())
}
