use serde::{Deserialize, Serialize};

use super::QueryState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub key: String,

    // Older indexers emit `created` instead of `date`.
    #[serde(default, alias = "created", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u64>,
}

/// One fetched page of matches. Replaced wholesale on every successful search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub total: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,

    /// Query echoed back by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,

    #[serde(default)]
    pub matches: Vec<Item>,
}

impl SearchResult {
    /// Server-supplied bounds win; older servers omit them and the window is
    /// derived from the query state that produced the request.
    pub fn window(&self, query: &QueryState) -> (u64, u64) {
        let start = self.start.unwrap_or(query.offset);
        let end = self
            .end
            .unwrap_or_else(|| query.offset.saturating_add(u64::from(query.limit)));
        (start, end)
    }

    pub fn window_label(&self, query: &QueryState) -> String {
        let (start, end) = self.window(query);
        format!("{} to {} of {}", start, end, self.total)
    }

    pub fn status_label(&self) -> String {
        format!("{} results", self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
