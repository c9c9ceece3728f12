//! Transaction outputs that may never be spent, whatever their scripts say.

use std::collections::HashSet;

use crate::params::{hash256_from_hex, Hash256, HexError};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct BannedInput {
    pub txid: Hash256,
    pub vout: u32,
}

/// Exact-match denylist of `(txid, vout)` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannedInputSet {
    inputs: HashSet<BannedInput>,
}

impl BannedInputSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from display-order txid hex strings.
    pub fn from_hex_entries(entries: &[(&str, u32)]) -> Result<Self, HexError> {
        let inputs = entries
            .iter()
            .map(|(txid, vout)| {
                Ok(BannedInput {
                    txid: hash256_from_hex(txid)?,
                    vout: *vout,
                })
            })
            .collect::<Result<HashSet<_>, HexError>>()?;
        Ok(Self { inputs })
    }

    pub fn is_banned(&self, txid: &Hash256, vout: u32) -> bool {
        self.inputs.contains(&BannedInput { txid: *txid, vout })
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}
