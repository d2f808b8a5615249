use std::cmp::Ordering;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use semantic_version::config::{self, Config, LOG_ENV, LOG_FILE_NAME, LogConfig};
use semantic_version::version::upgrade::{UpgradeScope, newest_within};
use semantic_version::{Number, ParseMode, Version, VersionError};

#[derive(Parser)]
#[command(name = "semantic-version")]
#[command(version, about = "Parse, validate and order semantic versions")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/semantic-version/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Accept partial versions such as "1" or "1.2"
    #[arg(long, global = true)]
    partial: bool,

    /// Coerce near-miss strings instead of rejecting them
    #[arg(long, global = true)]
    coerce: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the fields of a version as JSON
    Parse { version: String },
    /// Exit with a failure status unless the version is valid
    Validate { version: String },
    /// Print -1, 0 or 1 by precedence of A relative to B
    Compare { a: String, b: String },
    /// Sort versions by precedence, reading lines from stdin when none are given
    Sort {
        #[arg(long)]
        reverse: bool,
        versions: Vec<String>,
    },
    /// Print the newest available version within a scope, if newer than current
    Latest {
        current: String,
        available: Vec<String>,
        #[arg(long, value_enum, default_value_t = Scope::Major)]
        scope: Scope,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Scope {
    Patch,
    Minor,
    Major,
}

impl From<Scope> for UpgradeScope {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Patch => UpgradeScope::Patch,
            Scope::Minor => UpgradeScope::Minor,
            Scope::Major => UpgradeScope::Major,
        }
    }
}

/// Parses command arguments using the merged config and flags
struct Reader {
    mode: ParseMode,
    coerce: bool,
}

impl Reader {
    fn read(&self, input: &str) -> Result<Version, VersionError> {
        if self.coerce {
            Version::coerce(input, self.mode)
        } else {
            Version::parse(input, self.mode)
        }
    }
}

#[derive(Serialize)]
struct Fields<'a> {
    version: &'a Version,
    major: &'a Number,
    minor: Option<&'a Number>,
    patch: Option<&'a Number>,
    prerelease: Option<Vec<String>>,
    build: Option<Vec<String>>,
}

impl<'a> From<&'a Version> for Fields<'a> {
    fn from(version: &'a Version) -> Self {
        Self {
            version,
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            prerelease: version
                .prerelease()
                .as_option()
                .map(|_| version.prerelease().to_strings()),
            build: version
                .build()
                .as_option()
                .map(|_| version.build().to_strings()),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::config_path);
    let config = Config::load(&config_path)?;
    let _guard = init_logging(&config.log)?;
    debug!("Loaded config from {:?}: {:?}", config_path, config);

    let reader = Reader {
        mode: if cli.partial {
            ParseMode::Partial
        } else {
            config.parse.mode
        },
        coerce: cli.coerce || config.parse.coerce,
    };

    run(cli.command, &reader)
}

fn run(command: Command, reader: &Reader) -> anyhow::Result<ExitCode> {
    match command {
        Command::Parse { version } => {
            let parsed = reader.read(&version)?;
            println!("{}", serde_json::to_string_pretty(&Fields::from(&parsed))?);
        }
        Command::Validate { version } => {
            if let Err(e) = reader.read(&version) {
                eprintln!("{e}");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Compare { a, b } => {
            let ordering = reader.read(&a)?.cmp(&reader.read(&b)?);
            let sign = match ordering {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            };
            println!("{sign}");
        }
        Command::Sort { reverse, versions } => {
            let inputs = if versions.is_empty() {
                read_stdin_lines()?
            } else {
                versions
            };
            let mut parsed = inputs
                .iter()
                .map(|v| reader.read(v).with_context(|| format!("cannot sort {v:?}")))
                .collect::<anyhow::Result<Vec<Version>>>()?;
            parsed.sort();
            if reverse {
                parsed.reverse();
            }
            for version in parsed {
                println!("{version}");
            }
        }
        Command::Latest {
            current,
            available,
            scope,
        } => {
            let current = reader
                .read(&current)
                .with_context(|| format!("invalid current version {current:?}"))?;
            let available: Vec<Version> = available
                .iter()
                .filter_map(|v| {
                    reader
                        .read(v)
                        .inspect_err(|e| warn!("Skipping available version: {}", e))
                        .ok()
                })
                .collect();
            match newest_within(&current, &available, scope.into()) {
                Some(latest) => println!("{latest}"),
                None => info!("{} is already the newest within scope", current),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

fn init_logging(log: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).or_else(|_| EnvFilter::try_new(&log.level))?;

    if !log.file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
        return Ok(None);
    }

    let dir = config::data_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {dir:?}"))?;
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&dir, LOG_FILE_NAME));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(writer)
        .init();
    info!("Logging to {:?}", config::log_path());

    Ok(Some(guard))
}
