//! Genesis block construction, verification, and nonce search.
//!
//! The genesis block is a pure function of [`GenesisParams`]: a single
//! coinbase whose `scriptSig` carries the timestamp message, an 80-byte header
//! with a zero parent, and the merkle root of that one transaction.

use primitive_types::U256;
use trbod_consensus::{decode_hex, hash256_to_hex, GenesisParams, Hash256, HexError};
use trbod_primitives::block::{merkle_root, Block, BlockHeader};
use trbod_primitives::outpoint::OutPoint;
use trbod_primitives::script::{pay_to_pubkey, push_data, push_script_num};
use trbod_primitives::transaction::{Transaction, TxIn, TxOut};

use crate::difficulty::{compact_to_u256, CompactError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenesisError {
    HashMismatch { expected: Hash256, actual: Hash256 },
    MerkleMismatch { expected: Hash256, actual: Hash256 },
    Compact(CompactError),
    /// Target decodes to zero; no hash can satisfy it.
    ZeroTarget,
    PubKey(HexError),
}

impl std::fmt::Display for GenesisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenesisError::HashMismatch { expected, actual } => write!(
                f,
                "genesis hash mismatch (expected {}, got {})",
                hash256_to_hex(expected),
                hash256_to_hex(actual)
            ),
            GenesisError::MerkleMismatch { expected, actual } => write!(
                f,
                "genesis merkle root mismatch (expected {}, got {})",
                hash256_to_hex(expected),
                hash256_to_hex(actual)
            ),
            GenesisError::Compact(err) => write!(f, "genesis bits: {err}"),
            GenesisError::ZeroTarget => write!(f, "genesis bits decode to a zero target"),
            GenesisError::PubKey(err) => write!(f, "genesis output pubkey: {err}"),
        }
    }
}

impl std::error::Error for GenesisError {}

impl From<CompactError> for GenesisError {
    fn from(err: CompactError) -> Self {
        GenesisError::Compact(err)
    }
}

impl From<HexError> for GenesisError {
    fn from(err: HexError) -> Self {
        GenesisError::PubKey(err)
    }
}

/// Result of a nonce search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisSolution {
    pub time: u32,
    pub nonce: u32,
    pub hash: Hash256,
    pub merkle_root: Hash256,
}

pub fn genesis_script_sig(params: &GenesisParams) -> Vec<u8> {
    let mut script = Vec::with_capacity(params.timestamp_message.len() + 8);
    push_script_num(&mut script, params.script_sig_tag);
    push_script_num(&mut script, params.script_sig_extra);
    push_data(&mut script, params.timestamp_message.as_bytes());
    script
}

pub fn genesis_coinbase(params: &GenesisParams) -> Result<Transaction, GenesisError> {
    let pubkey = decode_hex(params.output_pubkey)?;
    Ok(Transaction {
        version: 1,
        vin: vec![TxIn {
            prevout: OutPoint::null(),
            script_sig: genesis_script_sig(params),
            sequence: u32::MAX,
        }],
        vout: vec![TxOut {
            value: params.reward,
            script_pubkey: pay_to_pubkey(&pubkey),
        }],
        lock_time: 0,
    })
}

/// Assembles the genesis block without checking it against the expected hashes.
pub fn build_genesis_block(params: &GenesisParams) -> Result<Block, GenesisError> {
    let coinbase = genesis_coinbase(params)?;
    let header = BlockHeader {
        version: params.version,
        prev_block: [0u8; 32],
        merkle_root: merkle_root(&[coinbase.txid()]),
        time: params.time,
        bits: params.bits,
        nonce: params.nonce,
    };
    Ok(Block {
        header,
        transactions: vec![coinbase],
    })
}

/// Builds the genesis block and checks it reproduces the pinned constants.
///
/// Only equality with `expected_hash` and `expected_merkle_root` is checked;
/// the proof-of-work of the genesis header is never validated.
pub fn verify_genesis(params: &GenesisParams) -> Result<Block, GenesisError> {
    let block = build_genesis_block(params)?;

    let merkle = block.header.merkle_root;
    if merkle != params.expected_merkle_root {
        return Err(GenesisError::MerkleMismatch {
            expected: params.expected_merkle_root,
            actual: merkle,
        });
    }

    let hash = block.hash();
    if hash != params.expected_hash {
        return Err(GenesisError::HashMismatch {
            expected: params.expected_hash,
            actual: hash,
        });
    }

    Ok(block)
}

/// Finds the first header at or after (`params.time`, `start_nonce`) whose hash
/// meets `params.bits`.
///
/// Nonces are tried in increasing order; when the nonce wraps past `u32::MAX`
/// the timestamp advances by one second and the nonce restarts at zero.
pub fn search_genesis(
    params: &GenesisParams,
    start_nonce: u32,
) -> Result<GenesisSolution, GenesisError> {
    let target = compact_to_u256(params.bits)?;
    if target.is_zero() {
        return Err(GenesisError::ZeroTarget);
    }

    let mut header = build_genesis_block(params)?.header;
    header.nonce = start_nonce;
    loop {
        let hash = header.hash();
        if U256::from_little_endian(&hash) <= target {
            return Ok(GenesisSolution {
                time: header.time,
                nonce: header.nonce,
                hash,
                merkle_root: header.merkle_root,
            });
        }
        header.nonce = header.nonce.wrapping_add(1);
        if header.nonce == 0 {
            header.time = header.time.wrapping_add(1);
        }
    }
}
