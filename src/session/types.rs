use crate::model::{CommandRequest, CommandResult, Metadata, SearchQuery, SearchResult};
use crate::remote::RemoteError;

/// Backend work the session wants performed. Each carries the tag its
/// completion must echo back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Search {
        generation: u64,
        query: SearchQuery,
    },
    Command {
        ticket: u64,
        payload: CommandRequest,
    },
    Metadata {
        ticket: u64,
        key: String,
    },
    Preview {
        ticket: u64,
        key: String,
    },
}

impl Request {
    pub fn label(&self) -> &'static str {
        match self {
            Request::Search { .. } => "search",
            Request::Command { .. } => "command",
            Request::Metadata { .. } => "metadata",
            Request::Preview { .. } => "preview",
        }
    }
}

/// Outcome of a `Request`, tagged the same way.
#[derive(Debug)]
pub enum Completion {
    Search {
        generation: u64,
        outcome: Result<SearchResult, RemoteError>,
    },
    Command {
        ticket: u64,
        outcome: Result<CommandResult, RemoteError>,
    },
    Metadata {
        ticket: u64,
        key: String,
        outcome: Result<Metadata, RemoteError>,
    },
    Preview {
        ticket: u64,
        key: String,
        outcome: Result<Vec<u8>, RemoteError>,
    },
}

/// What applying a completion caused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Follow-up request to hand to the worker.
    Submit(Request),
    /// A search finished; `ok` is false when it failed.
    SearchCompleted { ok: bool },
    /// The completion no longer matched the session and was dropped.
    Discarded,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Ready {
        total: u64,
    },
    Failed {
        reason: String,
    },
}

impl SearchStatus {
    pub fn label(&self) -> String {
        match self {
            SearchStatus::Idle => String::new(),
            SearchStatus::Loading => "Loading...".to_string(),
            SearchStatus::Ready { total } => format!("{} results", total),
            SearchStatus::Failed { reason } => format!("Failed to execute query ({})", reason),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleMessage {
    pub text: String,
    pub ok: bool,
}
