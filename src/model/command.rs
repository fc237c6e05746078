use serde::{Deserialize, Serialize};

/// Backend subcommand that applies metadata edits to a set of keys.
/// Fixed by the backend; changing it needs backend coordination.
pub const METADATA_COMMAND_PREFIX: &str = "annex metadata";

/// Body of `POST /api/cli`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub cmd: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<String>>,
}

impl CommandRequest {
    pub fn raw(cmd_text: impl Into<String>) -> Self {
        Self {
            cmd: cmd_text.into(),
            keys: None,
        }
    }

    /// With keys, the typed text becomes arguments of the metadata command;
    /// without keys it goes out verbatim.
    pub fn scoped(cmd_text: &str, keys: Vec<String>) -> Self {
        if keys.is_empty() {
            return Self::raw(cmd_text);
        }
        Self {
            cmd: format!("{} {}", METADATA_COMMAND_PREFIX, cmd_text),
            keys: Some(keys),
        }
    }

    /// True when the text already names the metadata subcommand. Such text
    /// is only ever sent scoped to a selection.
    pub fn targets_metadata(cmd_text: &str) -> bool {
        let mut words = cmd_text.split_whitespace();
        METADATA_COMMAND_PREFIX
            .split_whitespace()
            .all(|w| words.next() == Some(w))
    }

    pub fn key_count(&self) -> usize {
        self.keys.as_ref().map(|k| k.len()).unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    #[serde(default)]
    pub message: String,
    pub result: bool,
}
