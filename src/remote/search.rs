//! Search endpoints.

use super::*;
use crate::model::{SearchQuery, SearchResult};

impl LibrarianClient {
    pub fn search(&self, query: &SearchQuery) -> RemoteResult<SearchResult> {
        let url = self.api_url(&["search"])?;
        tracing::debug!(q = %query.q, offset = ?query.offset, limit = ?query.limit, "GET /api/search");
        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| RemoteError::from_reqwest("search", e))?;
        self.ensure_ok(resp, "search")?
            .json()
            .map_err(|e| RemoteError::from_reqwest("parse search result", e))
    }

    /// Field search: `GET /api/meta/{field}[/{value}]`. The backend turns this
    /// into the query `field:value`.
    pub fn search_meta(
        &self,
        field: &str,
        value: Option<&str>,
        offset: Option<u64>,
        limit: Option<u32>,
    ) -> RemoteResult<SearchResult> {
        let url = match value {
            Some(v) => self.api_url(&["meta", field, v])?,
            None => self.api_url(&["meta", field])?,
        };

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(o) = offset {
            params.push(("offset", o.to_string()));
        }
        if let Some(l) = limit {
            params.push(("limit", l.to_string()));
        }

        let resp = self
            .client
            .get(url)
            .query(&params)
            .send()
            .map_err(|e| RemoteError::from_reqwest("field search", e))?;
        self.ensure_ok(resp, "field search")?
            .json()
            .map_err(|e| RemoteError::from_reqwest("parse search result", e))
    }
}
