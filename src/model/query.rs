use serde::{Deserialize, Serialize};

pub const DEFAULT_QUERY: &str = "state:new";
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Current search expression and pagination window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub query: String,
    pub offset: u64,
    pub limit: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    pub fn new(query: impl Into<String>, limit: u32) -> Self {
        Self {
            query: query.into(),
            offset: 0,
            limit,
        }
    }

    /// Replaces the query and rewinds to the first page.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.offset = 0;
    }

    /// Past-the-end offsets are allowed; the backend answers with a short or empty page.
    pub fn next_page(&mut self) {
        self.offset = self.offset.saturating_add(u64::from(self.limit));
    }

    pub fn prev_page(&mut self) {
        self.offset = self.offset.saturating_sub(u64::from(self.limit));
    }

    pub fn to_search_query(&self) -> SearchQuery {
        SearchQuery {
            q: self.query.clone(),
            offset: (self.offset != 0).then_some(self.offset),
            limit: (self.limit != 0).then_some(self.limit),
        }
    }
}

/// Query-string parameters of `GET /api/search`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
