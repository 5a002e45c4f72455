use std::path::{Path, PathBuf};

use clap::ValueEnum;
use gimei_core::Script;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "gimei.toml";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    Missing(PathBuf),
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One composite value per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
    /// CSV with a header row.
    Csv,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: bool,
}

/// Contents of `gimei.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GimeiConfig {
    pub data_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub format: Option<OutputFormat>,
    pub script: Option<Script>,
    pub logging: LoggingConfig,
}

impl GimeiConfig {
    /// Loads `explicit` when given, otherwise `gimei.toml` if it exists.
    ///
    /// A missing default file yields the empty config; a missing explicit
    /// file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::Missing(path.to_path_buf()));
                }
                Self::read(path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::read(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Command-line values that may override the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub format: Option<OutputFormat>,
    pub script: Option<Script>,
}

/// Effective generation settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub script: Script,
}

impl Settings {
    pub fn resolve(config: &GimeiConfig, overrides: Overrides) -> Self {
        Self {
            data_dir: overrides.data_dir.or_else(|| config.data_dir.clone()),
            seed: overrides.seed.or(config.seed),
            format: overrides.format.or(config.format).unwrap_or_default(),
            script: overrides.script.or(config.script).unwrap_or(Script::Kanji),
        }
    }
}

/// Log level from the flag, then the config file, then the default.
pub fn resolve_log_level(flag: Option<&str>, config: &GimeiConfig) -> String {
    flag.map(str::to_string)
        .or_else(|| config.logging.level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}
