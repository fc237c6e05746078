use super::*;

/// One stored item. Metadata fields are multi-valued, as in git-annex.
#[derive(Clone, Debug)]
pub(super) struct FixtureItem {
    pub(super) key: String,
    pub(super) date: String,
    pub(super) fields: BTreeMap<String, Vec<String>>,
}

impl FixtureItem {
    pub(super) fn values(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(super) fn tags(&self) -> &[String] {
        self.values(TAG_FIELD)
    }

    pub(super) fn to_match(&self, rank: usize) -> Value {
        json!({
            "key": self.key,
            "date": self.date,
            "tags": self.tags(),
            "rank": rank,
        })
    }

    /// Body of `GET /api/data/{key}`.
    pub(super) fn to_metadata(&self) -> Value {
        json!({
            "git-annex": self.fields,
            "file": {
                "key": self.key,
                "date": self.date,
            },
        })
    }
}

pub(super) struct AppState {
    pub(super) items: RwLock<Vec<FixtureItem>>,
    pub(super) fail_commands: bool,
    pub(super) delay: Duration,
}

impl AppState {
    /// Holds every `/api` response back by the configured delay.
    pub(super) async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
