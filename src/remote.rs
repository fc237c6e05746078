use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::ClientConfig;
use crate::model::{CommandRequest, CommandResult};

mod error;
pub use self::error::RemoteError;

mod http_client;
mod items;
mod search;

pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Blocking client for the librarian HTTP API.
pub struct LibrarianClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl LibrarianClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).with_context(|| format!("parse base url {}", base_url))?;

        let mut builder = reqwest::blocking::Client::builder().user_agent("librarian");
        // reqwest's blocking client applies a 30s default; `None` means no limit at all.
        builder = builder.timeout(timeout);
        let client = builder.build().context("build reqwest client")?;
        Ok(Self { base_url, client })
    }

    pub fn from_config(cfg: &ClientConfig) -> Result<Self> {
        Self::new(&cfg.base_url, cfg.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn run_command(&self, req: &CommandRequest) -> RemoteResult<CommandResult> {
        let url = self.api_url(&["cli"])?;
        tracing::debug!(cmd = %req.cmd, keys = req.key_count(), "POST /api/cli");
        let resp = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(req)
            .send()
            .map_err(|e| RemoteError::from_reqwest("run command", e))?;
        let resp = self.ensure_ok(resp, "run command")?;
        resp.json()
            .map_err(|e| RemoteError::from_reqwest("parse command result", e))
    }
}

