use serde::Serialize;
use trbod_chainparams::ChainContext;
use trbod_consensus::{decode_hex, hash256_to_hex};
use trbod_pow::difficulty::difficulty_from_bits;
use trbod_primitives::pubkey_to_address;

#[derive(Serialize)]
pub(crate) struct ProfileSummary {
    network: &'static str,
    message_start: String,
    default_port: u16,
    genesis: GenesisSummary,
    consensus: ConsensusSummary,
    addresses: AddressSummary,
    dns_seeds: Vec<&'static str>,
    fixed_seeds: Vec<String>,
    flags: FlagSummary,
    governance: GovernanceSummary,
    checkpoints: Vec<CheckpointEntry>,
    last_checkpoint_time: i64,
    tx_count_at_last_checkpoint: i64,
    est_tx_per_day: f64,
    banned_inputs: usize,
}

#[derive(Serialize)]
struct GenesisSummary {
    hash: String,
    merkle_root: String,
    time: u32,
    bits: String,
    difficulty: f64,
    nonce: u32,
    output_address: Option<String>,
    timestamp_message: String,
}

#[derive(Serialize)]
struct ConsensusSummary {
    pow_limit: String,
    target_timespan: i64,
    target_spacing: i64,
    majority_enforce_block_upgrade: i32,
    majority_reject_block_outdated: i32,
    majority_window: i32,
    maturity: i32,
    masternode_count_drift: i32,
    max_money_out: i64,
    last_pow_block: i32,
    modifier_update_block: i32,
    max_reorganization_depth: i32,
    miner_threads: i32,
}

#[derive(Serialize)]
struct AddressSummary {
    pubkey_address: String,
    script_address: String,
    secret_key: String,
    ext_public_key: String,
    ext_secret_key: String,
    bech32_hrp: &'static str,
    ext_coin_type: u32,
}

#[derive(Serialize)]
struct FlagSummary {
    mining_requires_peers: bool,
    allow_min_difficulty_blocks: bool,
    default_consistency_checks: bool,
    require_standard: bool,
    mine_blocks_on_demand: bool,
    skip_proof_of_work_check: bool,
    testnet_to_be_deprecated_field_rpc: bool,
    headers_first_syncing_active: bool,
}

#[derive(Serialize)]
struct GovernanceSummary {
    alert_pubkey: &'static str,
    spork_key: &'static str,
    spork_key_temp: &'static str,
    obfuscation_pool_dummy_address: &'static str,
    budget_fee_confirmations: i32,
    pool_max_transactions: i32,
}

#[derive(Serialize)]
struct CheckpointEntry {
    height: i32,
    hash: String,
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

impl ProfileSummary {
    pub(crate) fn from_context(context: &ChainContext) -> Self {
        let profile = context.profile();
        let header = &context.genesis_block().header;
        let consensus = &profile.consensus;
        let prefixes = &profile.base58_prefixes;
        let flags = &profile.flags;
        let governance = &profile.governance;
        let checkpoint_summary = profile.checkpoints.summary();

        Self {
            network: profile.name(),
            message_start: hex(&profile.message_start),
            default_port: profile.default_port,
            genesis: GenesisSummary {
                hash: hash256_to_hex(&context.genesis_block().hash()),
                merkle_root: hash256_to_hex(&header.merkle_root),
                time: header.time,
                bits: format!("{:08x}", header.bits),
                difficulty: difficulty_from_bits(header.bits),
                nonce: header.nonce,
                output_address: decode_hex(profile.genesis.output_pubkey)
                    .ok()
                    .map(|pubkey| pubkey_to_address(&pubkey, prefixes)),
                timestamp_message: profile.genesis.timestamp_message.to_string(),
            },
            consensus: ConsensusSummary {
                pow_limit: hash256_to_hex(&consensus.pow_limit),
                target_timespan: consensus.target_timespan,
                target_spacing: consensus.target_spacing,
                majority_enforce_block_upgrade: consensus.majority_enforce_block_upgrade,
                majority_reject_block_outdated: consensus.majority_reject_block_outdated,
                majority_window: consensus.majority_window,
                maturity: consensus.maturity,
                masternode_count_drift: consensus.masternode_count_drift,
                max_money_out: consensus.max_money_out,
                last_pow_block: consensus.last_pow_block,
                modifier_update_block: consensus.modifier_update_block,
                max_reorganization_depth: consensus.max_reorganization_depth,
                miner_threads: consensus.miner_threads,
            },
            addresses: AddressSummary {
                pubkey_address: hex(prefixes.pubkey_address),
                script_address: hex(prefixes.script_address),
                secret_key: hex(prefixes.secret_key),
                ext_public_key: hex(prefixes.ext_public_key),
                ext_secret_key: hex(prefixes.ext_secret_key),
                bech32_hrp: profile.bech32_hrp,
                ext_coin_type: profile.ext_coin_type,
            },
            dns_seeds: profile.dns_seeds.iter().map(|seed| seed.host).collect(),
            fixed_seeds: profile
                .fixed_seeds
                .iter()
                .map(|seed| seed.addr.to_string())
                .collect(),
            flags: FlagSummary {
                mining_requires_peers: flags.mining_requires_peers,
                allow_min_difficulty_blocks: flags.allow_min_difficulty_blocks,
                default_consistency_checks: flags.default_consistency_checks,
                require_standard: flags.require_standard,
                mine_blocks_on_demand: flags.mine_blocks_on_demand,
                skip_proof_of_work_check: flags.skip_proof_of_work_check,
                testnet_to_be_deprecated_field_rpc: flags.testnet_to_be_deprecated_field_rpc,
                headers_first_syncing_active: flags.headers_first_syncing_active,
            },
            governance: GovernanceSummary {
                alert_pubkey: profile.alert_pubkey,
                spork_key: governance.spork_key,
                spork_key_temp: governance.spork_key_temp,
                obfuscation_pool_dummy_address: governance.obfuscation_pool_dummy_address,
                budget_fee_confirmations: governance.budget_fee_confirmations,
                pool_max_transactions: governance.pool_max_transactions,
            },
            checkpoints: profile
                .checkpoints
                .iter()
                .map(|(height, hash)| CheckpointEntry {
                    height,
                    hash: hash256_to_hex(hash),
                })
                .collect(),
            last_checkpoint_time: checkpoint_summary.last_checkpoint_time,
            tx_count_at_last_checkpoint: checkpoint_summary.tx_count_at_last,
            est_tx_per_day: checkpoint_summary.est_tx_per_day,
            banned_inputs: profile.banned_inputs.len(),
        }
    }

    pub(crate) fn render_text(&self) -> String {
        let mut lines = vec![
            format!("network: {}", self.network),
            format!("magic: {}", self.message_start),
            format!("port: {}", self.default_port),
            format!("genesis: {}", self.genesis.hash),
            format!("genesis merkle root: {}", self.genesis.merkle_root),
            format!(
                "genesis header: time {} bits {} nonce {}",
                self.genesis.time, self.genesis.bits, self.genesis.nonce
            ),
            format!("pow limit: {}", self.consensus.pow_limit),
            format!(
                "spacing: {}s timespan: {}s maturity: {}",
                self.consensus.target_spacing,
                self.consensus.target_timespan,
                self.consensus.maturity
            ),
            format!("last pow block: {}", self.consensus.last_pow_block),
            format!(
                "address prefixes: pubkey {} script {} secret {} hrp {}",
                self.addresses.pubkey_address,
                self.addresses.script_address,
                self.addresses.secret_key,
                self.addresses.bech32_hrp
            ),
            format!("dns seeds: {}", self.dns_seeds.join(", ")),
            format!("fixed seeds: {}", self.fixed_seeds.len()),
        ];
        lines.extend(
            self.checkpoints
                .iter()
                .map(|entry| format!("checkpoint {}: {}", entry.height, entry.hash)),
        );
        lines.push(format!("banned inputs: {}", self.banned_inputs));
        lines.join("\n")
    }
}
