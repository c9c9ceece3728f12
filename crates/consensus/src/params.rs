//! Network profile definitions.
//!
//! Main is spelled out in full. Test is Main with a set of overrides, Regtest
//! is Test with its own overrides, and UnitTest is Main with a minimal set.
//! Each override step is a pure function over an owned profile, so a built
//! profile never shares state with the one it was derived from.

use std::borrow::Cow;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::banned::BannedInputSet;
use crate::checkpoints::{CheckpointData, CheckpointTable};
use crate::money::{Amount, COIN};
use crate::network::Network;
use crate::seeds::{convert_seed_specs, DnsSeed, SeedAddress, SeedSpec};

/// 256-bit hash in internal (little-endian) byte order.
pub type Hash256 = [u8; 32];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    InvalidLength,
    InvalidHex,
}

impl std::fmt::Display for HexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexError::InvalidLength => write!(f, "invalid hex length"),
            HexError::InvalidHex => write!(f, "invalid hex digit"),
        }
    }
}

impl std::error::Error for HexError {}

/// Parses a display-order hash (as printed by block explorers). Short input is
/// left-padded with zeros, so `"0x01"` is the hash with numeric value one.
pub fn hash256_from_hex(input: &str) -> Result<Hash256, HexError> {
    let mut hex = input.trim();
    if let Some(stripped) = hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X")) {
        hex = stripped;
    }
    if hex.is_empty() || hex.len() > 64 {
        return Err(HexError::InvalidLength);
    }
    if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(HexError::InvalidHex);
    }

    let padded = format!("{hex:0>64}");
    let mut bytes = [0u8; 32];
    for (i, byte_out) in bytes.iter_mut().enumerate() {
        let start = i * 2;
        *byte_out = u8::from_str_radix(&padded[start..start + 2], 16)
            .map_err(|_| HexError::InvalidHex)?;
    }
    bytes.reverse();
    Ok(bytes)
}

pub fn hash256_to_hex(hash: &Hash256) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(64);
    for byte in hash.iter().rev() {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

pub fn decode_hex(input: &str) -> Result<Vec<u8>, HexError> {
    let hex = input.trim();
    if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(HexError::InvalidHex);
    }
    if hex.len() % 2 != 0 {
        return Err(HexError::InvalidLength);
    }
    (0..hex.len())
        .step_by(2)
        .map(|start| {
            u8::from_str_radix(&hex[start..start + 2], 16).map_err(|_| HexError::InvalidHex)
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusParams {
    pub pow_limit: Hash256,
    pub max_reorganization_depth: i32,
    pub majority_enforce_block_upgrade: i32,
    pub majority_reject_block_outdated: i32,
    pub majority_window: i32,
    pub miner_threads: i32,
    pub target_timespan: i64,
    pub target_spacing: i64,
    pub maturity: i32,
    pub masternode_count_drift: i32,
    pub max_money_out: Amount,
    pub last_pow_block: i32,
    pub modifier_update_block: i32,
}

impl ConsensusParams {
    /// Blocks per difficulty retarget window.
    pub fn interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    pub fn money_range(&self, value: Amount) -> bool {
        crate::money::money_range(value, self.max_money_out)
    }
}

/// Inputs that fully determine a genesis block, plus the constants it must
/// reproduce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisParams {
    pub timestamp_message: Cow<'static, str>,
    /// Public key paid by the coinbase output (hex).
    pub output_pubkey: &'static str,
    /// Leading numeric push of the coinbase `scriptSig`.
    pub script_sig_tag: i64,
    pub script_sig_extra: i64,
    pub reward: Amount,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub expected_hash: Hash256,
    pub expected_merkle_root: Hash256,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Base58Prefixes {
    pub pubkey_address: &'static [u8],
    pub script_address: &'static [u8],
    pub secret_key: &'static [u8],
    pub ext_public_key: &'static [u8],
    pub ext_secret_key: &'static [u8],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainFlags {
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GovernanceParams {
    pub spork_key: &'static str,
    pub spork_key_temp: &'static str,
    pub obfuscation_pool_dummy_address: &'static str,
    /// Confirmations before a budget finalization fee counts.
    pub budget_fee_confirmations: i32,
    pub pool_max_transactions: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkProfile {
    pub network: Network,
    pub message_start: [u8; 4],
    pub alert_pubkey: &'static str,
    pub default_port: u16,
    pub consensus: ConsensusParams,
    pub genesis: GenesisParams,
    pub base58_prefixes: Base58Prefixes,
    pub bech32_hrp: &'static str,
    pub ext_coin_type: u32,
    pub dns_seeds: &'static [DnsSeed],
    pub fixed_seeds: Vec<SeedAddress>,
    pub flags: ChainFlags,
    pub governance: GovernanceParams,
    pub checkpoints: CheckpointTable,
    pub banned_inputs: BannedInputSet,
}

impl NetworkProfile {
    pub fn name(&self) -> &'static str {
        self.network.name()
    }

    pub fn is_banned(&self, txid: &Hash256, vout: u32) -> bool {
        self.banned_inputs.is_banned(txid, vout)
    }
}

const GENESIS_TIMESTAMP: &str = "TRBO Rebirth started 3rd June 2019 - Spare a Moment?";
const GENESIS_PUBKEY_HEX: &str = "04a3318945c8b48e1f2fc5c1ebd68ce5935e794a97a802a24c03641e99984e5b81f8bf84604bec3dfd3abb0374bffa555d30c5ed9eb3d38cd24586b33fc95e75ef";
const GENESIS_SCRIPT_SIG_TAG: i64 = 486_604_799;
const POW_LIMIT_HEX: &str = "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

// Header hashes here are double SHA-256, not Quark, so these genesis hashes
// (and main checkpoint 0) do not match the live TRBO network.
const MAINNET_GENESIS_HASH: &str =
    "fa6f774d25853bb1fd5d9bfaf9e6de638e8fe8026eb78d9c5c610fc1bb5c721f";
const TESTNET_GENESIS_HASH: &str =
    "0aa2de9e3abafdac6185a62bc7665985f41673ca3429bff6247e95e13962e4c0";
const REGTEST_GENESIS_HASH: &str =
    "943575375e6ef8d2b093e8bfe3b8c586fa53b7ac8e7277136f33841c85b2fe83";
const GENESIS_MERKLE_ROOT: &str =
    "679bbc54b19f91f7f5e06c5db31c3330f44fd79ca1a34da46a8224151aff7faa";

const MAINNET_ALERT_KEY: &str = "0449397babfa22d594551ee56d4ecffb95c583b8a17c887b463dc8a9b3e897126af004bdeac8cec4bc7d134069014320271bd5a8dca273a49788cfda7ea7ad02bd";
const MAINNET_SPORK_KEY: &str = "04db9cce4fe5919db582be63f4b4c6820546fa2028336165c8baf946bc3068a710a3ee6c9b7c214a7c1b4e6ae1cfd949dc022b0a901f68937746ef809983407adb";

pub const MAINNET_CHECKPOINTS: CheckpointData = CheckpointData {
    entries: &[
        (0, MAINNET_GENESIS_HASH),
        (
            200,
            "661cf7bafcb768e2cc02a398a28d5183058fd0efb360e574afff5696accc0a52",
        ),
        (
            58000,
            "0b9f3ea9f8baabe69f40695c7726d4c30d4cd09962ae59a80f879f1303c9df3e",
        ),
        (
            100000,
            "f315084d51d5baabd114e1339830e97f8530fa1d0f5479d04ddd6ac2e0f2376b",
        ),
        (
            200000,
            "1c372f50f10ee7aef43aab7e86649f40671b534c675ea55673b8126f329809aa",
        ),
        (
            300000,
            "9f02fc6abf2b88e1f408eecd2e445ae35f34ac78cc2d0467c2593da493e8a11a",
        ),
    ],
    last_checkpoint_time: 1_588_354_951,
    tx_count_at_last: 300_000,
    est_tx_per_day: 1_000.0,
};

// Testnet and regtest never pinned a real genesis checkpoint.
pub const TESTNET_CHECKPOINTS: CheckpointData = CheckpointData {
    entries: &[(0, "0x001")],
    last_checkpoint_time: 1_559_471_400,
    tx_count_at_last: 0,
    est_tx_per_day: 250.0,
};

pub const REGTEST_CHECKPOINTS: CheckpointData = CheckpointData {
    entries: &[(0, "0x001")],
    last_checkpoint_time: 1_559_471_400,
    tx_count_at_last: 0,
    est_tx_per_day: 100.0,
};

/// `(txid, vout)` pairs excluded from spending on mainnet.
pub const MAINNET_BANNED_INPUTS: &[(&str, u32)] = &[];

const MAINNET_DNS_SEEDS: [DnsSeed; 3] = [
    DnsSeed {
        name: "94.177.242.241",
        host: "94.177.242.241",
    },
    DnsSeed {
        name: "185.35.64.141",
        host: "185.35.64.141",
    },
    DnsSeed {
        name: "94.177.251.97",
        host: "94.177.251.97",
    },
];

// Fallback peers are the DNS seed hosts on the default port.
const MAINNET_FIXED_SEEDS: [SeedSpec; 3] = [
    SeedSpec::ipv4([94, 177, 242, 241], 9533),
    SeedSpec::ipv4([185, 35, 64, 141], 9533),
    SeedSpec::ipv4([94, 177, 251, 97], 9533),
];

const TESTNET_DNS_SEEDS: [DnsSeed; 1] = [DnsSeed {
    name: "testnetdns",
    host: "testnetdns.trbo.org",
}];

const TESTNET_FIXED_SEEDS: [SeedSpec; 0] = [];

const NO_DNS_SEEDS: [DnsSeed; 0] = [];

pub fn profile_for(network: Network) -> NetworkProfile {
    profile_for_at(network, unix_now(), &mut rand::thread_rng())
}

/// Builds a profile with an explicit clock and randomness source for the
/// fallback seed timestamps.
pub fn profile_for_at<R: Rng + ?Sized>(network: Network, now: i64, rng: &mut R) -> NetworkProfile {
    match network {
        Network::Main => mainnet_profile(now, rng),
        Network::Test => testnet_profile(mainnet_profile(now, rng), now, rng),
        Network::Regtest => regtest_profile(testnet_profile(mainnet_profile(now, rng), now, rng)),
        Network::UnitTest => unittest_profile(mainnet_profile(now, rng)),
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or_default()
}

fn mainnet_profile<R: Rng + ?Sized>(now: i64, rng: &mut R) -> NetworkProfile {
    NetworkProfile {
        network: Network::Main,
        message_start: [0x2b, 0x4e, 0x46, 0xfb],
        alert_pubkey: MAINNET_ALERT_KEY,
        default_port: 9533,
        consensus: ConsensusParams {
            pow_limit: hash256_from_hex(POW_LIMIT_HEX).expect("mainnet pow limit"),
            max_reorganization_depth: 100,
            majority_enforce_block_upgrade: 750,
            majority_reject_block_outdated: 950,
            majority_window: 1_000,
            miner_threads: 0,
            target_timespan: 60,
            target_spacing: 2 * 60,
            maturity: 20,
            masternode_count_drift: 20,
            max_money_out: 10_000_000_000 * COIN,
            last_pow_block: 200,
            modifier_update_block: 1,
        },
        genesis: GenesisParams {
            timestamp_message: Cow::Borrowed(GENESIS_TIMESTAMP),
            output_pubkey: GENESIS_PUBKEY_HEX,
            script_sig_tag: GENESIS_SCRIPT_SIG_TAG,
            script_sig_extra: 4,
            reward: 0,
            version: 1,
            time: 1_559_765_647,
            bits: 0x1e0f_fff0,
            nonce: 5_594_247,
            expected_hash: hash256_from_hex(MAINNET_GENESIS_HASH).expect("mainnet genesis hash"),
            expected_merkle_root: hash256_from_hex(GENESIS_MERKLE_ROOT)
                .expect("genesis merkle root"),
        },
        base58_prefixes: Base58Prefixes {
            pubkey_address: &[65],
            script_address: &[3],
            secret_key: &[55],
            ext_public_key: &[0x04, 0x88, 0xb2, 0x1e],
            ext_secret_key: &[0x04, 0x88, 0xad, 0xe4],
        },
        bech32_hrp: "tr",
        ext_coin_type: 222,
        dns_seeds: &MAINNET_DNS_SEEDS,
        fixed_seeds: convert_seed_specs(&MAINNET_FIXED_SEEDS, now, rng),
        flags: ChainFlags {
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: true,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,
        },
        governance: GovernanceParams {
            spork_key: MAINNET_SPORK_KEY,
            spork_key_temp: "",
            obfuscation_pool_dummy_address: "TTuXaT4YMB8exQeyk9khGy2nLLunvEgsLn",
            budget_fee_confirmations: 6,
            pool_max_transactions: 3,
        },
        checkpoints: CheckpointTable::from_data(&MAINNET_CHECKPOINTS)
            .expect("mainnet checkpoints"),
        banned_inputs: BannedInputSet::from_hex_entries(MAINNET_BANNED_INPUTS)
            .expect("mainnet banned inputs"),
    }
}

fn testnet_profile<R: Rng + ?Sized>(base: NetworkProfile, now: i64, rng: &mut R) -> NetworkProfile {
    NetworkProfile {
        network: Network::Test,
        message_start: [0x41, 0x4d, 0x5e, 0x78],
        alert_pubkey: "",
        default_port: 9544,
        consensus: ConsensusParams {
            majority_enforce_block_upgrade: 51,
            majority_reject_block_outdated: 75,
            majority_window: 100,
            miner_threads: 0,
            target_timespan: 60,
            target_spacing: 60,
            maturity: 5,
            masternode_count_drift: 4,
            modifier_update_block: 51_197,
            max_money_out: 1_000_000_000 * COIN,
            last_pow_block: 200,
            ..base.consensus
        },
        genesis: GenesisParams {
            time: 1_524_873_600,
            nonce: 2_394_236,
            expected_hash: hash256_from_hex(TESTNET_GENESIS_HASH).expect("testnet genesis hash"),
            ..base.genesis
        },
        base58_prefixes: Base58Prefixes {
            pubkey_address: &[139],
            script_address: &[19],
            secret_key: &[239],
            ext_public_key: &[0x3a, 0x80, 0x61, 0xa0],
            ext_secret_key: &[0x3a, 0x80, 0x58, 0x37],
        },
        bech32_hrp: "ts",
        ext_coin_type: 1,
        dns_seeds: &TESTNET_DNS_SEEDS,
        fixed_seeds: convert_seed_specs(&TESTNET_FIXED_SEEDS, now, rng),
        flags: ChainFlags {
            mining_requires_peers: true,
            allow_min_difficulty_blocks: true,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: true,
            ..base.flags
        },
        governance: GovernanceParams {
            spork_key: "",
            spork_key_temp: "",
            obfuscation_pool_dummy_address: "",
            budget_fee_confirmations: 3,
            pool_max_transactions: 2,
        },
        checkpoints: CheckpointTable::from_data(&TESTNET_CHECKPOINTS)
            .expect("testnet checkpoints"),
        ..base
    }
}

fn regtest_profile(base: NetworkProfile) -> NetworkProfile {
    NetworkProfile {
        network: Network::Regtest,
        message_start: [0x2d, 0x53, 0x6f, 0x40],
        default_port: 9544,
        consensus: ConsensusParams {
            pow_limit: hash256_from_hex(POW_LIMIT_HEX).expect("regtest pow limit"),
            majority_enforce_block_upgrade: 750,
            majority_reject_block_outdated: 950,
            majority_window: 1_000,
            miner_threads: 1,
            target_timespan: 24 * 60 * 60,
            target_spacing: 60,
            maturity: 0,
            // Proof-of-stake timing does not fit regtest, so it stays PoW.
            last_pow_block: 999_999_999,
            ..base.consensus
        },
        genesis: GenesisParams {
            time: 1_524_873_600,
            bits: 0x207f_ffff,
            nonce: 906_460,
            expected_hash: hash256_from_hex(REGTEST_GENESIS_HASH).expect("regtest genesis hash"),
            ..base.genesis
        },
        bech32_hrp: "trbot",
        dns_seeds: &NO_DNS_SEEDS,
        fixed_seeds: Vec::new(),
        flags: ChainFlags {
            mining_requires_peers: false,
            allow_min_difficulty_blocks: true,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            testnet_to_be_deprecated_field_rpc: false,
            ..base.flags
        },
        governance: GovernanceParams {
            spork_key: "",
            spork_key_temp: "",
            ..base.governance
        },
        checkpoints: CheckpointTable::from_data(&REGTEST_CHECKPOINTS)
            .expect("regtest checkpoints"),
        ..base
    }
}

fn unittest_profile(base: NetworkProfile) -> NetworkProfile {
    NetworkProfile {
        network: Network::UnitTest,
        default_port: 19_666,
        dns_seeds: &NO_DNS_SEEDS,
        fixed_seeds: Vec::new(),
        ext_coin_type: 1,
        flags: ChainFlags {
            mining_requires_peers: false,
            default_consistency_checks: true,
            allow_min_difficulty_blocks: false,
            mine_blocks_on_demand: true,
            ..base.flags
        },
        ..base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NOW: i64 = 1_700_000_000;

    fn profile(network: Network) -> NetworkProfile {
        profile_for_at(network, NOW, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn hex_helpers() {
        let one = hash256_from_hex("0x001").expect("hash");
        let mut expected = [0u8; 32];
        expected[0] = 1;
        assert_eq!(one, expected);
        assert_eq!(
            hash256_to_hex(&one),
            "0000000000000000000000000000000000000000000000000000000000000001"
        );

        let genesis = hash256_from_hex(MAINNET_GENESIS_HASH).expect("hash");
        assert_eq!(hash256_to_hex(&genesis), MAINNET_GENESIS_HASH);

        assert_eq!(hash256_from_hex(""), Err(HexError::InvalidLength));
        assert_eq!(hash256_from_hex(&"f".repeat(65)), Err(HexError::InvalidLength));
        assert_eq!(hash256_from_hex("0xgg"), Err(HexError::InvalidHex));

        assert_eq!(decode_hex("04ac").expect("bytes"), vec![0x04, 0xac]);
        assert_eq!(decode_hex("abc"), Err(HexError::InvalidLength));
        assert_eq!(decode_hex("zz"), Err(HexError::InvalidHex));
    }

    #[test]
    fn mainnet_profile_literals() {
        let main = profile(Network::Main);
        assert_eq!(main.name(), "main");
        assert_eq!(main.message_start, [0x2b, 0x4e, 0x46, 0xfb]);
        assert_eq!(main.default_port, 9533);
        assert_eq!(main.consensus.majority_enforce_block_upgrade, 750);
        assert_eq!(main.consensus.majority_reject_block_outdated, 950);
        assert_eq!(main.consensus.majority_window, 1_000);
        assert_eq!(main.consensus.target_timespan, 60);
        assert_eq!(main.consensus.target_spacing, 120);
        assert_eq!(main.consensus.maturity, 20);
        assert_eq!(main.consensus.max_money_out, 10_000_000_000 * COIN);
        assert_eq!(main.consensus.last_pow_block, 200);
        assert_eq!(main.consensus.modifier_update_block, 1);
        assert_eq!(hash256_to_hex(&main.consensus.pow_limit), POW_LIMIT_HEX);
        assert_eq!(main.genesis.bits, 504_365_040);
        assert_eq!(main.base58_prefixes.pubkey_address, &[65]);
        assert_eq!(main.ext_coin_type, 222);
        assert_eq!(main.bech32_hrp, "tr");
        assert_eq!(main.dns_seeds.len(), 3);
        assert_eq!(main.fixed_seeds.len(), 3);
        assert!(main.flags.skip_proof_of_work_check);
        assert!(main.flags.require_standard);
        assert_eq!(main.governance.budget_fee_confirmations, 6);
        assert_eq!(main.governance.pool_max_transactions, 3);
        assert!(main.consensus.money_range(main.consensus.max_money_out));
        assert!(!main.consensus.money_range(-1));
    }

    #[test]
    fn testnet_overrides_main() {
        let main = profile(Network::Main);
        let test = profile(Network::Test);
        assert_eq!(test.name(), "test");
        assert_eq!(test.default_port, 9544);
        assert_eq!(test.message_start, [0x41, 0x4d, 0x5e, 0x78]);
        assert_eq!(test.alert_pubkey, "");
        assert_eq!(test.consensus.majority_window, 100);
        assert_eq!(test.consensus.modifier_update_block, 51_197);
        assert_eq!(test.consensus.max_money_out, 1_000_000_000 * COIN);
        assert_eq!(test.consensus.interval(), 1);
        assert_eq!(test.base58_prefixes.secret_key, &[239]);
        assert_eq!(test.dns_seeds[0].host, "testnetdns.trbo.org");
        assert!(test.fixed_seeds.is_empty());
        assert!(test.flags.allow_min_difficulty_blocks);
        assert!(test.flags.testnet_to_be_deprecated_field_rpc);
        assert_eq!(test.governance.budget_fee_confirmations, 3);

        // Not overridden: inherited from main.
        assert_eq!(test.consensus.pow_limit, main.consensus.pow_limit);
        assert_eq!(test.consensus.max_reorganization_depth, 100);
        assert_eq!(test.genesis.bits, main.genesis.bits);
        assert_eq!(test.genesis.timestamp_message, main.genesis.timestamp_message);
        assert_eq!(
            test.flags.skip_proof_of_work_check,
            main.flags.skip_proof_of_work_check
        );
    }

    #[test]
    fn regtest_overrides_test() {
        let test = profile(Network::Test);
        let regtest = profile(Network::Regtest);
        assert_eq!(regtest.name(), "regtest");
        assert_eq!(regtest.message_start, [0x2d, 0x53, 0x6f, 0x40]);
        assert_eq!(regtest.consensus.target_timespan, 86_400);
        assert_eq!(regtest.consensus.miner_threads, 1);
        assert_eq!(regtest.consensus.maturity, 0);
        assert_eq!(regtest.consensus.last_pow_block, 999_999_999);
        assert_eq!(regtest.genesis.bits, 0x207f_ffff);
        assert_eq!(regtest.genesis.time, test.genesis.time);
        assert_eq!(regtest.bech32_hrp, "trbot");
        assert!(regtest.dns_seeds.is_empty());
        assert!(!regtest.flags.require_standard);
        assert!(regtest.flags.mine_blocks_on_demand);
        assert!(regtest.flags.default_consistency_checks);

        // Inherited from test.
        assert_eq!(regtest.base58_prefixes, test.base58_prefixes);
        assert_eq!(regtest.consensus.modifier_update_block, 51_197);
        assert_eq!(regtest.governance.budget_fee_confirmations, 3);
        assert_eq!(regtest.checkpoints.summary().est_tx_per_day, 100.0);
    }

    #[test]
    fn unittest_overrides_main() {
        let main = profile(Network::Main);
        let unit = profile(Network::UnitTest);
        assert_eq!(unit.name(), "unittest");
        assert_eq!(unit.default_port, 19_666);
        assert_eq!(unit.ext_coin_type, 1);
        assert!(unit.dns_seeds.is_empty());
        assert!(unit.fixed_seeds.is_empty());
        assert!(!unit.flags.mining_requires_peers);
        assert!(unit.flags.default_consistency_checks);
        assert!(unit.flags.mine_blocks_on_demand);

        assert_eq!(unit.message_start, main.message_start);
        assert_eq!(unit.genesis, main.genesis);
        assert_eq!(unit.checkpoints, main.checkpoints);
        assert_eq!(unit.consensus, main.consensus);
    }

    #[test]
    fn identities_are_unique() {
        let names: Vec<&str> = Network::ALL
            .iter()
            .map(|network| profile(*network).name())
            .collect();
        assert_eq!(names, ["main", "test", "regtest", "unittest"]);
    }

    #[test]
    fn mainnet_checkpoint_heights() {
        let main = profile(Network::Main);
        let heights: Vec<i32> = main.checkpoints.iter().map(|(height, _)| height).collect();
        assert_eq!(heights, [0, 200, 58_000, 100_000, 200_000, 300_000]);

        let mut hashes: Vec<Hash256> = main.checkpoints.iter().map(|(_, hash)| *hash).collect();
        assert!(hashes.iter().all(|hash| *hash != [0u8; 32]));
        hashes.sort();
        hashes.dedup();
        assert_eq!(hashes.len(), heights.len());

        assert_eq!(main.checkpoints.hash_at(0), Some(main.genesis.expected_hash));
        let summary = main.checkpoints.summary();
        assert_eq!(summary.last_checkpoint_time, 1_588_354_951);
        assert_eq!(summary.tx_count_at_last, 300_000);
    }

    #[test]
    fn mainnet_bans_nothing() {
        let main = profile(Network::Main);
        assert!(main.banned_inputs.is_empty());
        assert!(!main.is_banned(&main.genesis.expected_merkle_root, 0));
        assert!(!main.is_banned(&[0xaau8; 32], u32::MAX));
    }
}
