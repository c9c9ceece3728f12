//! Proof-of-work targets and genesis block construction.

pub mod difficulty;
pub mod genesis;
pub mod validation;
