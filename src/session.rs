//! Client-side session state: query and paging, the current result page,
//! the selection set, the command console and the detail view.
//!
//! The session never talks to the network. Transitions that need the
//! backend return [`Request`]s; their outcomes come back through
//! [`Session::apply`] tagged with the generation or ticket they were issued
//! under, and anything that no longer matches is dropped.

use std::time::{Duration, Instant};

use crate::config::ClientConfig;
use crate::model::{QueryState, SearchResult};

mod console;
mod detail;
mod search;
mod selection;
mod types;

use self::search::PendingSearch;

pub use self::console::{ConsoleState, METADATA_NEEDS_SELECTION};
pub use self::detail::{DetailPhase, DetailView, MetadataState, PreviewState};
pub use self::selection::SelectionSet;
pub use self::types::{Completion, ConsoleMessage, Effect, Request, SearchStatus};

pub const DEFAULT_DISMISS_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug)]
pub struct Session {
    query: QueryState,
    results: Option<SearchResult>,
    // Query state the current `results` were fetched with.
    results_query: Option<QueryState>,
    status: SearchStatus,

    selection: SelectionSet,

    search_generation: u64,
    pending_search: Option<PendingSearch>,

    console: ConsoleState,
    detail: Option<DetailView>,

    next_ticket: u64,
    dismiss_delay: Duration,
}

impl Session {
    pub fn new(query: QueryState) -> Self {
        Self {
            query,
            results: None,
            results_query: None,
            status: SearchStatus::Idle,
            selection: SelectionSet::default(),
            search_generation: 0,
            pending_search: None,
            console: ConsoleState::default(),
            detail: None,
            next_ticket: 0,
            dismiss_delay: DEFAULT_DISMISS_DELAY,
        }
    }

    pub fn from_config(cfg: &ClientConfig) -> Self {
        Self::new(QueryState::new(cfg.initial_query.clone(), cfg.page_size))
            .with_dismiss_delay(cfg.dismiss_delay())
    }

    pub fn with_dismiss_delay(mut self, delay: Duration) -> Self {
        self.dismiss_delay = delay;
        self
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn results(&self) -> Option<&SearchResult> {
        self.results.as_ref()
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    /// `"{start} to {end} of {total}"` for the page on screen.
    pub fn window_label(&self) -> Option<String> {
        let results = self.results.as_ref()?;
        let q = self.results_query.as_ref().unwrap_or(&self.query);
        Some(results.window_label(q))
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn console(&self) -> &ConsoleState {
        &self.console
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    /// State-mutating controls are disabled while a search or command is in flight.
    pub fn controls_enabled(&self) -> bool {
        self.pending_search.is_none() && self.console.pending().is_none()
    }

    // Selection

    pub fn toggle_selection_mode(&mut self) -> bool {
        let active = self.selection.toggle_mode();
        tracing::debug!(active, "selection mode toggled");
        active
    }

    pub fn toggle_item(&mut self, key: &str) -> bool {
        self.selection.toggle(key)
    }

    pub fn select_only(&mut self, key: &str) {
        self.selection.select_only(key);
    }

    /// Empties the selection. Refused while a command scoped to it is in flight.
    pub fn clear_selection(&mut self) -> bool {
        if self.console.pending().is_some() {
            return false;
        }
        self.selection.clear();
        true
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selection.contains(key)
    }

    /// Selected keys in sorted order, as sent with a scoped command.
    pub fn selected_keys(&self) -> Vec<String> {
        self.selection.to_vec()
    }

    /// Click on a rendered item: toggles it in selection mode, otherwise opens
    /// its detail view and returns the fetches that view needs.
    pub fn activate_item(&mut self, key: &str) -> Vec<Request> {
        if self.selection.is_active() {
            self.selection.toggle(key);
            return Vec::new();
        }
        self.open_detail(key)
    }

    /// Feeds a backend outcome back into the session.
    pub fn apply(&mut self, completion: Completion, now: Instant) -> Vec<Effect> {
        match completion {
            Completion::Search {
                generation,
                outcome,
            } => self.apply_search(generation, outcome),
            Completion::Command { ticket, outcome } => self.apply_command(ticket, outcome, now),
            Completion::Metadata {
                ticket,
                key,
                outcome,
            } => self.apply_metadata(ticket, &key, outcome),
            Completion::Preview {
                ticket,
                key,
                outcome,
            } => self.apply_preview(ticket, &key, outcome),
        }
    }

    fn take_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }
}

#[cfg(test)]
#[path = "tests/session/session_tests.rs"]
mod tests;
