use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    /// Non-success HTTP status. `reason` is the canonical status text.
    #[error("{label}: {code} {reason}")]
    Status {
        label: String,
        code: u16,
        reason: String,
    },

    #[error("{label}: request timed out")]
    Timeout { label: String },

    #[error("{label}: {source}")]
    Transport {
        label: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{label}: malformed response: {source}")]
    Decode {
        label: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid url {url}")]
    InvalidUrl { url: String },
}

impl RemoteError {
    pub(super) fn from_reqwest(label: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return RemoteError::Timeout {
                label: label.to_string(),
            };
        }
        if err.is_decode() {
            return RemoteError::Decode {
                label: label.to_string(),
                source: err,
            };
        }
        RemoteError::Transport {
            label: label.to_string(),
            source: err,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            RemoteError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, RemoteError::Timeout { .. })
    }

    /// Short text for status lines and the console output area.
    pub fn user_message(&self) -> String {
        match self {
            RemoteError::Status { reason, .. } => reason.clone(),
            RemoteError::Timeout { .. } => "Request timed out".to_string(),
            RemoteError::Transport { source, .. } => format!("Connection failed: {}", source),
            RemoteError::Decode { .. } => "Malformed response".to_string(),
            RemoteError::InvalidUrl { url } => format!("Invalid url {}", url),
        }
    }
}
