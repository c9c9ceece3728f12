//! `trbod-genesis`: derives a genesis header for new timestamp/bits inputs.
//!
//! Starts from the selected network's genesis parameters, applies the
//! overrides given on the command line, and searches for the first nonce
//! whose header hash meets the target.

use std::borrow::Cow;

use serde::Serialize;
use trbod_consensus::{hash256_to_hex, profile_for, Network};
use trbod_log::log_info;
use trbod_pow::genesis::{search_genesis, GenesisSolution};

use crate::logging;

#[derive(Clone, Debug, PartialEq, Eq)]
struct GenesisArgs {
    network: Network,
    time: Option<u32>,
    bits: Option<u32>,
    start_nonce: u32,
    message: Option<String>,
    json: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum GenesisAction {
    Search(GenesisArgs),
    PrintHelp,
}

#[derive(Serialize)]
struct GenesisReport {
    network: &'static str,
    timestamp_message: String,
    time: u32,
    bits: String,
    nonce: u32,
    hash: String,
    merkle_root: String,
}

impl GenesisReport {
    fn new(network: Network, message: &str, bits: u32, solution: &GenesisSolution) -> Self {
        Self {
            network: network.name(),
            timestamp_message: message.to_string(),
            time: solution.time,
            bits: format!("{bits:08x}"),
            nonce: solution.nonce,
            hash: hash256_to_hex(&solution.hash),
            merkle_root: hash256_to_hex(&solution.merkle_root),
        }
    }

    fn render_text(&self) -> String {
        [
            format!("network: {}", self.network),
            format!("message: {}", self.timestamp_message),
            format!("time: {}", self.time),
            format!("bits: {}", self.bits),
            format!("nonce: {}", self.nonce),
            format!("hash: {}", self.hash),
            format!("merkle root: {}", self.merkle_root),
        ]
        .join("\n")
    }
}

pub fn run_entry() -> Result<(), String> {
    match parse_args_from(std::env::args().skip(1))? {
        GenesisAction::PrintHelp => {
            println!("{}", usage());
            Ok(())
        }
        GenesisAction::Search(args) => {
            logging::init(logging::LogConfig::default());
            println!("{}", run_search(&args)?);
            Ok(())
        }
    }
}

fn run_search(args: &GenesisArgs) -> Result<String, String> {
    let mut params = profile_for(args.network).genesis;
    if let Some(message) = &args.message {
        params.timestamp_message = Cow::Owned(message.clone());
    }
    if let Some(time) = args.time {
        params.time = time;
    }
    if let Some(bits) = args.bits {
        params.bits = bits;
    }

    log_info!(
        "searching {} genesis from time {} nonce {} bits {:08x}",
        args.network,
        params.time,
        args.start_nonce,
        params.bits
    );
    let solution = search_genesis(&params, args.start_nonce).map_err(|err| err.to_string())?;
    let report = GenesisReport::new(args.network, &params.timestamp_message, params.bits, &solution);
    if args.json {
        serde_json::to_string_pretty(&report).map_err(|err| err.to_string())
    } else {
        Ok(report.render_text())
    }
}

fn parse_args_from<I>(raw_args: I) -> Result<GenesisAction, String>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = GenesisArgs {
        network: Network::Main,
        time: None,
        bits: None,
        start_nonce: 0,
        message: None,
        json: false,
    };

    let mut args = raw_args.into_iter();
    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}\n{}", usage()))
        };
        match arg.as_str() {
            "--network" => {
                let raw = value("--network")?;
                parsed.network = Network::parse(&raw)
                    .ok_or_else(|| format!("invalid network '{raw}'\n{}", usage()))?;
            }
            "--time" => {
                let raw = value("--time")?;
                parsed.time = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid time '{raw}'\n{}", usage()))?,
                );
            }
            "--bits" => {
                let raw = value("--bits")?;
                parsed.bits =
                    Some(parse_u32(&raw).ok_or_else(|| format!("invalid bits '{raw}'\n{}", usage()))?);
            }
            "--nonce" => {
                let raw = value("--nonce")?;
                parsed.start_nonce =
                    parse_u32(&raw).ok_or_else(|| format!("invalid nonce '{raw}'\n{}", usage()))?;
            }
            "--message" => parsed.message = Some(value("--message")?),
            "--json" => parsed.json = true,
            "--help" | "-h" => return Ok(GenesisAction::PrintHelp),
            other => return Err(format!("unknown argument '{other}'\n{}", usage())),
        }
    }
    Ok(GenesisAction::Search(parsed))
}

/// Decimal, or hexadecimal with a `0x` prefix.
fn parse_u32(raw: &str) -> Option<u32> {
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}

fn usage() -> String {
    [
        "Usage:",
        "  trbod-genesis [options]",
        "",
        "Searches for a genesis nonce, starting from the network's genesis parameters.",
        "",
        "Options:",
        "  --help, -h  Print this help and exit",
        "  --network <main|test|regtest|unittest>  Base parameters (default: main)",
        "  --time <unix seconds>  Header timestamp to start from",
        "  --bits <compact>  Target in compact form, e.g. 0x207fffff",
        "  --nonce <n>  First nonce to try (default: 0)",
        "  --message <text>  Coinbase timestamp message",
        "  --json  Print the solution as JSON",
    ]
    .join("\n")
}
