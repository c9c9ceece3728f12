//! Verified chain parameters and the selection of the active network.

pub mod error;
pub mod registry;
pub mod selector;

pub use error::ParamsError;
pub use registry::{ChainParams, ProfileRegistry};
pub use selector::{ChainContext, ParameterSelector, UnitTestParams};
