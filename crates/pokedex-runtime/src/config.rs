use crate::{Error, Result};
use pokedex_core::DataPaths;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_VERSION: &str = "x";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where lookups that miss the record cache are answered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Snapshot when one is installed, the API otherwise
    #[default]
    Auto,
    Remote,
    Database,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Auto => "auto",
            SourceKind::Remote => "remote",
            SourceKind::Database => "database",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(SourceKind::Auto),
            "remote" | "api" => Ok(SourceKind::Remote),
            "database" | "db" => Ok(SourceKind::Database),
            other => Err(Error::Config(format!("unknown source '{}'", other))),
        }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

fn default_api_base_url() -> String {
    pokedex_providers::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub source: SourceKind,
    /// Snapshot location; `<data_dir>/veekun-pokedex.sqlite` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Never touch the network; answer from the caches and the snapshot
    #[serde(default)]
    pub offline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            version: default_version(),
            source: SourceKind::default(),
            database: None,
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            offline: false,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn database_path(&self, paths: &DataPaths) -> PathBuf {
        match &self.database {
            Some(path) => pokedex_core::expand_tilde(&path.to_string_lossy()),
            None => paths.database_file(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
