use super::*;
use crate::model::Metadata;
use crate::remote::RemoteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailPhase {
    Closed,
    Opening,
    Loaded,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MetadataState {
    Pending,
    Loaded(Metadata),
    Failed(String),
}

/// Presentational only; a failed preview is logged and shown as missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewState {
    Loading,
    Ready { bytes: usize },
    Failed,
}

/// Single-item inspection, keyed by one item key.
#[derive(Clone, Debug)]
pub struct DetailView {
    key: String,
    metadata_ticket: u64,
    preview_ticket: u64,
    metadata: MetadataState,
    preview: PreviewState,
}

impl DetailView {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn metadata(&self) -> &MetadataState {
        &self.metadata
    }

    pub fn preview(&self) -> PreviewState {
        self.preview
    }

    pub fn phase(&self) -> DetailPhase {
        match self.metadata {
            MetadataState::Pending => DetailPhase::Opening,
            MetadataState::Loaded(_) => DetailPhase::Loaded,
            MetadataState::Failed(_) => DetailPhase::Failed,
        }
    }

    pub fn tags(&self) -> Vec<String> {
        match &self.metadata {
            MetadataState::Loaded(m) => m.tags(),
            _ => Vec::new(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match &self.metadata {
            MetadataState::Pending => vec!["Loading metadata...".to_string()],
            MetadataState::Loaded(m) => m.format_lines(),
            MetadataState::Failed(reason) => vec![format!("Failed to load metadata: {}", reason)],
        }
    }
}

impl Session {
    pub fn detail_phase(&self) -> DetailPhase {
        self.detail
            .as_ref()
            .map(|d| d.phase())
            .unwrap_or(DetailPhase::Closed)
    }

    /// Opens (or re-targets) the detail view. Anything previously shown is
    /// dropped, and responses for the old view will no longer match.
    pub fn open_detail(&mut self, key: &str) -> Vec<Request> {
        let metadata_ticket = self.take_ticket();
        let preview_ticket = self.take_ticket();
        self.detail = Some(DetailView {
            key: key.to_string(),
            metadata_ticket,
            preview_ticket,
            metadata: MetadataState::Pending,
            preview: PreviewState::Loading,
        });
        tracing::debug!(key, "detail opened");
        vec![
            Request::Metadata {
                ticket: metadata_ticket,
                key: key.to_string(),
            },
            Request::Preview {
                ticket: preview_ticket,
                key: key.to_string(),
            },
        ]
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Makes the open item the whole selection, closes the detail view and
    /// opens the console. Returns false when no detail view is open or a
    /// command is still in flight.
    pub fn promote_detail_to_selection(&mut self) -> bool {
        if self.console.pending().is_some() {
            tracing::debug!("command in flight; detail not promoted");
            return false;
        }
        let Some(view) = self.detail.take() else {
            return false;
        };
        self.selection.select_only(&view.key);
        self.open_console();
        true
    }

    pub(super) fn apply_metadata(
        &mut self,
        ticket: u64,
        key: &str,
        outcome: Result<Metadata, RemoteError>,
    ) -> Vec<Effect> {
        let Some(view) = self.detail.as_mut().filter(|v| {
            v.key == key && v.metadata_ticket == ticket && matches!(v.metadata, MetadataState::Pending)
        }) else {
            tracing::debug!(key, ticket, "discarding stale metadata response");
            return vec![Effect::Discarded];
        };

        view.metadata = match outcome {
            Ok(m) => MetadataState::Loaded(m),
            Err(err) => {
                tracing::warn!(key, error = %err, "metadata fetch failed");
                MetadataState::Failed(err.user_message())
            }
        };
        Vec::new()
    }

    pub(super) fn apply_preview(
        &mut self,
        ticket: u64,
        key: &str,
        outcome: Result<Vec<u8>, RemoteError>,
    ) -> Vec<Effect> {
        let Some(view) = self
            .detail
            .as_mut()
            .filter(|v| v.key == key && v.preview_ticket == ticket)
        else {
            return vec![Effect::Discarded];
        };

        view.preview = match outcome {
            Ok(bytes) => PreviewState::Ready { bytes: bytes.len() },
            Err(err) => {
                tracing::warn!(key, error = %err, "preview load failed");
                PreviewState::Failed
            }
        };
        Vec::new()
    }
}
