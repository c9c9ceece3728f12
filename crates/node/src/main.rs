use trbod_log as logging;
use trbod_log::{log_error, log_info, log_warn};

pub mod genesis_tool;
mod summary;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use trbod_chainparams::{ChainContext, ParameterSelector, ProfileRegistry};
use trbod_consensus::{hash256_from_hex, hash256_to_hex, Hash256, Network};

use crate::summary::ProfileSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Query {
    Summary,
    Checkpoint(i32),
    IsBanned { txid: Hash256, vout: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Config {
    network: Network,
    log_level: logging::Level,
    log_format: logging::Format,
    log_timestamps: bool,
    json: bool,
    query: Query,
    conf_path: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum CliAction {
    Run(Config),
    PrintHelp,
    PrintVersion,
}

pub fn run_entry() -> Result<(), String> {
    match parse_args()? {
        CliAction::PrintHelp => {
            println!("{}", usage());
            Ok(())
        }
        CliAction::PrintVersion => {
            println!("trbod {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliAction::Run(config) => run_with_config(config),
    }
}

fn run_with_config(config: Config) -> Result<(), String> {
    logging::init(logging::LogConfig {
        level: config.log_level,
        format: config.log_format,
        timestamps: config.log_timestamps,
    });
    if let Some(conf_file) = &config.conf_path {
        log_info!("using config file {}", conf_file.display());
    }

    let registry = ProfileRegistry::new().map_err(|err| {
        log_error!("chain parameters unusable: {err}");
        err.to_string()
    })?;
    let mut selector = ParameterSelector::new(registry);
    let context = selector.select(config.network).clone();
    if context.profile().flags.testnet_to_be_deprecated_field_rpc {
        log_warn!("{} reports deprecated testnet fields over rpc", context.network());
    }

    let output = render_query(&context, &config.query, config.json)?;
    println!("{output}");
    Ok(())
}

fn render_query(context: &ChainContext, query: &Query, json: bool) -> Result<String, String> {
    match query {
        Query::Summary => {
            let summary = ProfileSummary::from_context(context);
            if json {
                serde_json::to_string_pretty(&summary).map_err(|err| err.to_string())
            } else {
                Ok(summary.render_text())
            }
        }
        Query::Checkpoint(height) => {
            let hash = context.checkpoints().hash_at(*height);
            if json {
                let value = serde_json::json!({
                    "network": context.network().name(),
                    "height": height,
                    "hash": hash.as_ref().map(hash256_to_hex),
                });
                serde_json::to_string_pretty(&value).map_err(|err| err.to_string())
            } else {
                Ok(hash
                    .as_ref()
                    .map(hash256_to_hex)
                    .unwrap_or_else(|| format!("no checkpoint at height {height}")))
            }
        }
        Query::IsBanned { txid, vout } => {
            let banned = context.is_banned(txid, *vout);
            if json {
                let value = serde_json::json!({
                    "network": context.network().name(),
                    "txid": hash256_to_hex(txid),
                    "vout": vout,
                    "banned": banned,
                });
                serde_json::to_string_pretty(&value).map_err(|err| err.to_string())
            } else {
                Ok(banned.to_string())
            }
        }
    }
}

fn parse_args() -> Result<CliAction, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from<I>(raw_args: I) -> Result<CliAction, String>
where
    I: IntoIterator<Item = String>,
{
    let mut network: Option<Network> = None;
    let mut legacy_testnet = false;
    let mut legacy_regtest = false;
    let mut conf_path: Option<PathBuf> = None;
    let mut log_level = logging::Level::Info;
    let mut log_level_set = false;
    let mut log_format = logging::Format::Text;
    let mut log_format_set = false;
    let mut log_timestamps = true;
    let mut log_timestamps_set = false;
    let mut json = false;
    let mut query = Query::Summary;

    let mut args = raw_args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--network" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --network\n{}", usage()))?;
                network = Some(
                    Network::parse(&value)
                        .ok_or_else(|| format!("invalid network '{value}'\n{}", usage()))?,
                );
            }
            "-testnet" | "--testnet" => legacy_testnet = true,
            "-regtest" | "--regtest" => legacy_regtest = true,
            "--conf" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --conf\n{}", usage()))?;
                conf_path = Some(PathBuf::from(value));
            }
            "--log-level" | "--loglevel" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --log-level\n{}", usage()))?;
                log_level = logging::Level::parse(&value)
                    .ok_or_else(|| format!("invalid log level '{value}'\n{}", usage()))?;
                log_level_set = true;
            }
            "--log-format" | "--logformat" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --log-format\n{}", usage()))?;
                log_format = logging::Format::parse(&value)
                    .ok_or_else(|| format!("invalid log format '{value}'\n{}", usage()))?;
                log_format_set = true;
            }
            "--log-timestamps" | "--logtimestamps" => {
                log_timestamps = true;
                log_timestamps_set = true;
            }
            "--no-log-timestamps" | "--no-logtimestamps" => {
                log_timestamps = false;
                log_timestamps_set = true;
            }
            "--json" => json = true,
            "--checkpoint" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --checkpoint\n{}", usage()))?;
                let height = value
                    .parse::<i32>()
                    .map_err(|_| format!("invalid checkpoint height '{value}'\n{}", usage()))?;
                query = Query::Checkpoint(height);
            }
            "--is-banned" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --is-banned\n{}", usage()))?;
                query = parse_outpoint(&value)
                    .ok_or_else(|| format!("invalid outpoint '{value}' (expected TXID:VOUT)"))?;
            }
            "--help" | "-h" => return Ok(CliAction::PrintHelp),
            "--version" | "-V" => return Ok(CliAction::PrintVersion),
            other => return Err(format!("unknown argument '{other}'\n{}", usage())),
        }
    }

    if legacy_testnet && legacy_regtest {
        return Err("-testnet and -regtest cannot be used together".to_string());
    }
    let legacy = if legacy_regtest {
        Some(Network::Regtest)
    } else if legacy_testnet {
        Some(Network::Test)
    } else {
        None
    };
    match (network, legacy) {
        (Some(explicit), Some(switch)) if explicit != switch => {
            return Err(format!(
                "--network {explicit} conflicts with the -{} switch",
                if switch == Network::Regtest {
                    "regtest"
                } else {
                    "testnet"
                }
            ));
        }
        (None, Some(switch)) => network = Some(switch),
        _ => {}
    }

    if let Some(conf_file) = &conf_path {
        let conf = load_conf(conf_file)?
            .ok_or_else(|| format!("config file {} not found", conf_file.display()))?;
        if network.is_none() {
            network = network_from_conf(&conf, conf_file)?;
        }
        if !log_level_set {
            if let Some(raw) = conf_value(&conf, "loglevel") {
                log_level = logging::Level::parse(raw).ok_or_else(|| {
                    format!("invalid loglevel '{raw}' in {}", conf_file.display())
                })?;
            }
        }
        if !log_format_set {
            if let Some(raw) = conf_value(&conf, "logformat") {
                log_format = logging::Format::parse(raw).ok_or_else(|| {
                    format!("invalid logformat '{raw}' in {}", conf_file.display())
                })?;
            }
        }
        if !log_timestamps_set {
            if let Some(raw) = conf_value(&conf, "logtimestamps") {
                log_timestamps = parse_conf_bool(raw).ok_or_else(|| {
                    format!("invalid logtimestamps '{raw}' in {}", conf_file.display())
                })?;
            }
        }
    }

    Ok(CliAction::Run(Config {
        network: network.unwrap_or(Network::Main),
        log_level,
        log_format,
        log_timestamps,
        json,
        query,
        conf_path,
    }))
}

fn parse_outpoint(value: &str) -> Option<Query> {
    let (txid, vout) = value.rsplit_once(':')?;
    if txid.trim_start_matches("0x").len() != 64 {
        return None;
    }
    Some(Query::IsBanned {
        txid: hash256_from_hex(txid).ok()?,
        vout: vout.parse().ok()?,
    })
}

/// `network=` wins over the legacy `regtest=1` / `testnet=1` keys.
fn network_from_conf(
    conf: &HashMap<String, Vec<String>>,
    conf_file: &Path,
) -> Result<Option<Network>, String> {
    if let Some(raw) = conf_value(conf, "network") {
        return Network::parse(raw)
            .map(Some)
            .ok_or_else(|| format!("invalid network '{raw}' in {}", conf_file.display()));
    }

    let flag = |key: &str| -> Result<bool, String> {
        match conf_value(conf, key) {
            None => Ok(false),
            Some(raw) => parse_conf_bool(raw)
                .ok_or_else(|| format!("invalid {key} value '{raw}' in {}", conf_file.display())),
        }
    };
    match (flag("testnet")?, flag("regtest")?) {
        (true, true) => Err(format!(
            "testnet and regtest are both enabled in {}",
            conf_file.display()
        )),
        (_, true) => Ok(Some(Network::Regtest)),
        (true, false) => Ok(Some(Network::Test)),
        (false, false) => Ok(None),
    }
}

fn conf_value<'a>(conf: &'a HashMap<String, Vec<String>>, key: &str) -> Option<&'a str> {
    conf.get(key)
        .and_then(|values| values.last())
        .map(String::as_str)
}

fn load_conf(path: &Path) -> Result<Option<HashMap<String, Vec<String>>>, String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(format!("failed to read {}: {err}", path.display())),
    };

    let mut out: HashMap<String, Vec<String>> = HashMap::new();
    for raw_line in contents.lines() {
        let line = raw_line
            .split(['#', ';'])
            .next()
            .unwrap_or_default()
            .trim();
        if line.is_empty() {
            continue;
        }
        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (line, "1"),
        };
        if key.is_empty() {
            continue;
        }
        out.entry(key.to_ascii_lowercase())
            .or_default()
            .push(value.to_string());
    }
    Ok(Some(out))
}

fn parse_conf_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn usage() -> String {
    [
        "Usage:",
        "  trbod [options]",
        "",
        "Prints the parameters of the selected network, or answers one query about them.",
        "",
        "Options:",
        "  --help, -h  Print this help and exit",
        "  --version, -V  Print version and exit",
        "  --network <main|test|regtest|unittest>  Network to select (default: main)",
        "  -testnet, -regtest  Legacy network switches (mutually exclusive)",
        "  --conf <path>  Read key=value settings (network, testnet, regtest, loglevel, logformat, logtimestamps)",
        "  --log-level <error|warn|info|debug|trace>  Log verbosity (default: info)",
        "  --log-format <text|json>  Log output format (default: text)",
        "  --log-timestamps, --no-log-timestamps  Toggle log timestamps",
        "  --json  Print output as JSON",
        "  --checkpoint <height>  Print the checkpoint hash pinned at <height>",
        "  --is-banned <txid:vout>  Print whether spending the output is forbidden",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    fn run_config(list: &[&str]) -> Config {
        match parse_args_from(args(list)).expect("parse") {
            CliAction::Run(config) => config,
            other => panic!("expected run config, got {other:?}"),
        }
    }

    fn write_conf(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write conf");
        file
    }

    #[test]
    fn defaults_to_main_summary() {
        let config = run_config(&[]);
        assert_eq!(config.network, Network::Main);
        assert_eq!(config.query, Query::Summary);
        assert_eq!(config.log_level, logging::Level::Info);
        assert!(config.log_timestamps);
        assert!(!config.json);
        assert_eq!(config.conf_path, None);
    }

    #[test]
    fn network_flag_and_legacy_switches() {
        assert_eq!(run_config(&["--network", "testnet"]).network, Network::Test);
        assert_eq!(run_config(&["--network", "unittest"]).network, Network::UnitTest);
        assert_eq!(run_config(&["-regtest"]).network, Network::Regtest);
        assert_eq!(run_config(&["-testnet"]).network, Network::Test);
        assert_eq!(
            run_config(&["-regtest", "--network", "regtest"]).network,
            Network::Regtest
        );

        assert!(parse_args_from(args(&["-testnet", "-regtest"])).is_err());
        assert!(parse_args_from(args(&["-testnet", "--network", "main"])).is_err());
        assert!(parse_args_from(args(&["--network", "simnet"])).is_err());
        assert!(parse_args_from(args(&["--network"])).is_err());
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(
            parse_args_from(args(&["--help", "--bogus"])),
            Ok(CliAction::PrintHelp)
        );
        assert_eq!(parse_args_from(args(&["-V"])), Ok(CliAction::PrintVersion));
        assert!(parse_args_from(args(&["--bogus"])).is_err());
    }

    #[test]
    fn queries() {
        assert_eq!(
            run_config(&["--checkpoint", "200"]).query,
            Query::Checkpoint(200)
        );
        assert!(parse_args_from(args(&["--checkpoint", "tip"])).is_err());

        let txid = "1c372f50f10ee7aef43aab7e86649f40671b534c675ea55673b8126f329809aa";
        let config = run_config(&["--is-banned", &format!("{txid}:3"), "--json"]);
        assert!(config.json);
        assert_eq!(
            config.query,
            Query::IsBanned {
                txid: hash256_from_hex(txid).expect("txid"),
                vout: 3
            }
        );
        assert!(parse_args_from(args(&["--is-banned", txid])).is_err());
        assert!(parse_args_from(args(&["--is-banned", "abcd:0"])).is_err());
        assert!(parse_args_from(args(&["--is-banned", &format!("{txid}:-1")])).is_err());
    }

    #[test]
    fn conf_file_selects_network_and_logging() {
        let conf = write_conf("# node settings\nregtest=1\nloglevel=debug ; verbose\nlogformat=json\n");
        let path = conf.path().to_string_lossy().into_owned();

        let config = run_config(&["--conf", &path]);
        assert_eq!(config.conf_path.as_deref(), Some(conf.path()));
        assert_eq!(config.network, Network::Regtest);
        assert_eq!(config.log_level, logging::Level::Debug);
        assert_eq!(config.log_format, logging::Format::Json);

        // Command line wins over the file.
        let config = run_config(&["--conf", &path, "--network", "main", "--log-level", "warn"]);
        assert_eq!(config.network, Network::Main);
        assert_eq!(config.log_level, logging::Level::Warn);
        assert_eq!(config.log_format, logging::Format::Json);
    }

    #[test]
    fn conf_network_keys() {
        let conf = write_conf("testnet=1\n");
        let path = conf.path().to_string_lossy().into_owned();
        assert_eq!(run_config(&["--conf", &path]).network, Network::Test);

        let conf = write_conf("testnet=0\nnetwork=unittest\n");
        let path = conf.path().to_string_lossy().into_owned();
        assert_eq!(run_config(&["--conf", &path]).network, Network::UnitTest);

        let conf = write_conf("testnet=1\nregtest=1\n");
        let path = conf.path().to_string_lossy().into_owned();
        assert!(parse_args_from(args(&["--conf", &path])).is_err());

        let conf = write_conf("regtest=maybe\n");
        let path = conf.path().to_string_lossy().into_owned();
        assert!(parse_args_from(args(&["--conf", &path])).is_err());
    }

    #[test]
    fn missing_conf_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("trbo.conf");
        let path = missing.to_string_lossy().into_owned();
        assert!(parse_args_from(args(&["--conf", &path])).is_err());
    }

    #[test]
    fn conf_parser_handles_comments_and_bare_keys() {
        let conf = write_conf("  # comment\nTestNet\nloglevel = trace # trailing\n\n=orphan\n");
        let parsed = load_conf(conf.path()).expect("read").expect("exists");
        assert_eq!(conf_value(&parsed, "testnet"), Some("1"));
        assert_eq!(conf_value(&parsed, "loglevel"), Some("trace"));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn query_rendering() {
        let mut selector = ParameterSelector::new(ProfileRegistry::new().expect("registry"));
        let context = selector.select(Network::Main).clone();

        let hash = render_query(&context, &Query::Checkpoint(58_000), false).expect("render");
        assert_eq!(
            hash,
            "0b9f3ea9f8baabe69f40695c7726d4c30d4cd09962ae59a80f879f1303c9df3e"
        );
        let missing = render_query(&context, &Query::Checkpoint(1), false).expect("render");
        assert_eq!(missing, "no checkpoint at height 1");

        let banned = Query::IsBanned {
            txid: [7u8; 32],
            vout: 0,
        };
        assert_eq!(render_query(&context, &banned, false), Ok("false".to_string()));

        let json = render_query(&context, &Query::Checkpoint(0), true).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(value["network"], "main");
        assert_eq!(
            value["hash"],
            "fa6f774d25853bb1fd5d9bfaf9e6de638e8fe8026eb78d9c5c610fc1bb5c721f"
        );
    }
}
