use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::version::ParseMode;

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "SEMANTIC_VERSION_LOG";

/// Default log level when neither the config nor the environment sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// File name of the log inside the data directory
pub const LOG_FILE_NAME: &str = "semantic-version.log";

const APP_DIR: &str = "semantic-version";

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub parse: ParseConfig,
    pub log: LogConfig,
}

/// Parsing-related configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseConfig {
    /// Grammar used for version arguments
    pub mode: ParseMode,
    /// Coerce near-miss strings instead of rejecting them
    pub coerce: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// Filter directive, e.g. "debug" or "semantic_version=trace"
    pub level: String,
    /// Write logs to the data directory instead of stderr
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the data directory for semantic-version.
/// Uses $XDG_DATA_HOME/semantic-version if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/semantic-version,
/// or ./semantic-version if neither is available.
pub fn data_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the configuration directory, following the same
/// rules as [`data_dir`] with $XDG_CONFIG_HOME and ~/.config.
pub fn config_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

fn dir_with_env(xdg_home: Option<String>, home_dir: Option<PathBuf>, fallback: &str) -> PathBuf {
    let base = xdg_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(fallback)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_DIR)
}
