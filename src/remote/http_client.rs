use super::*;

impl LibrarianClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> RemoteResult<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        tracing::warn!(%status, label, "backend returned failure status");
        Err(RemoteError::Status {
            label: label.to_string(),
            code: status.as_u16(),
            reason: status
                .canonical_reason()
                .map(|s| s.to_string())
                .unwrap_or_else(|| status.as_str().to_string()),
        })
    }

    /// Builds `{base}/api/{segments...}` with each segment percent-encoded,
    /// so item keys can carry any characters.
    pub(super) fn api_url(&self, segments: &[&str]) -> RemoteResult<reqwest::Url> {
        let invalid = || RemoteError::InvalidUrl {
            url: self.base_url.clone(),
        };
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|_| invalid())?;
        {
            let mut path = url.path_segments_mut().map_err(|_| invalid())?;
            path.pop_if_empty().push("api");
            for s in segments {
                path.push(s);
            }
        }
        Ok(url)
    }

    pub(super) fn get_bytes(&self, segments: &[&str], label: &str) -> RemoteResult<Vec<u8>> {
        let url = self.api_url(segments)?;
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| RemoteError::from_reqwest(label, e))?;
        let resp = self.ensure_ok(resp, label)?;
        let bytes = resp
            .bytes()
            .map_err(|e| RemoteError::from_reqwest(label, e))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
