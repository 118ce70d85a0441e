//! Application configuration loaded from a TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) is a
//! valid configuration:
//!
//! ```toml
//! log_level = "debug"
//! log_file = "itax.log"
//! world_bank_url = "https://api.worldbank.org"
//! # Use saved World Bank responses instead of HTTP.
//! indicator_dir = "data/indicators"
//! cache_ttl_hours = 24
//! request_timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cache_ttl_hours must be positive, got {0}")]
    InvalidTtl(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log records are also appended here when set.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default = "default_world_bank_url")]
    pub world_bank_url: String,
    #[serde(default)]
    pub indicator_dir: Option<PathBuf>,
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: i64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_world_bank_url() -> String {
    itax_data::world_bank::DEFAULT_BASE_URL.to_string()
}

fn default_cache_ttl_hours() -> i64 {
    itax_data::cache::DEFAULT_TTL_HOURS
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
            world_bank_url: default_world_bank_url(),
            indicator_dir: None,
            cache_ttl_hours: default_cache_ttl_hours(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(
        s: &str,
        origin: &Path,
    ) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        if config.cache_ttl_hours <= 0 {
            return Err(ConfigError::InvalidTtl(config.cache_ttl_hours));
        }
        Ok(config)
    }

    /// Reads `path`. A missing file is an error: callers only pass a path
    /// the user asked for explicitly.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Defaults when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.cache_ttl_hours)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
