//! Per-item endpoints: metadata, thumbnails, previews and original files.

use super::*;
use crate::model::Metadata;

impl LibrarianClient {
    pub fn metadata(&self, key: &str) -> RemoteResult<Metadata> {
        let url = self.api_url(&["data", key])?;
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| RemoteError::from_reqwest("fetch metadata", e))?;
        self.ensure_ok(resp, "fetch metadata")?
            .json()
            .map_err(|e| RemoteError::from_reqwest("parse metadata", e))
    }

    pub fn thumb(&self, key: &str) -> RemoteResult<Vec<u8>> {
        self.get_bytes(&["thumb", key], "fetch thumbnail")
    }

    pub fn preview(&self, key: &str) -> RemoteResult<Vec<u8>> {
        self.get_bytes(&["preview", key], "fetch preview")
    }

    pub fn item(&self, key: &str) -> RemoteResult<Vec<u8>> {
        self.get_bytes(&["item", key], "fetch item")
    }
}
