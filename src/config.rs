use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{DEFAULT_PAGE_SIZE, DEFAULT_QUERY};

pub const CONFIG_ENV: &str = "LIBRARIAN_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("page_size must be greater than zero")]
    ZeroPageSize,

    #[error("base_url must not be empty")]
    EmptyBaseUrl,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub base_url: String,

    /// Items per page.
    pub page_size: u32,

    /// Query issued when the shell starts.
    pub initial_query: String,

    /// Upper bound for a single backend request. 0 disables the bound.
    pub request_timeout_secs: u64,

    /// How long a successful command result stays visible before the console closes.
    pub dismiss_delay_ms: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            initial_query: DEFAULT_QUERY.to_string(),
            request_timeout_secs: 30,
            dismiss_delay_ms: 1000,
            log_file: None,
        }
    }
}

impl ClientConfig {
    /// Reads `path` if given, else the file named by `LIBRARIAN_CONFIG`, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let cfg = match path.map(Path::to_path_buf).or(from_env) {
            Some(p) => Self::read(&p)?,
            None => Self::default(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(())
    }

    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        page_size: Option<u32>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(n) = page_size {
            self.page_size = n;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.dismiss_delay_ms)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
