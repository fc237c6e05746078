use super::*;
use crate::remote::RemoteError;

#[derive(Clone, Debug)]
pub(super) struct PendingSearch {
    pub(super) generation: u64,
    pub(super) query: QueryState,
}

impl Session {
    pub fn set_query(&mut self, text: impl Into<String>) -> Request {
        self.query.set_query(text);
        self.begin_search()
    }

    pub fn next_page(&mut self) -> Request {
        self.query.next_page();
        self.begin_search()
    }

    pub fn prev_page(&mut self) -> Request {
        self.query.prev_page();
        self.begin_search()
    }

    /// Re-issues the current query without changing it.
    pub fn refresh(&mut self) -> Request {
        self.begin_search()
    }

    fn begin_search(&mut self) -> Request {
        self.search_generation += 1;
        let generation = self.search_generation;
        self.pending_search = Some(PendingSearch {
            generation,
            query: self.query.clone(),
        });
        self.status = SearchStatus::Loading;
        tracing::debug!(generation, q = %self.query.query, offset = self.query.offset, "search issued");
        Request::Search {
            generation,
            query: self.query.to_search_query(),
        }
    }

    pub(super) fn apply_search(
        &mut self,
        generation: u64,
        outcome: Result<SearchResult, RemoteError>,
    ) -> Vec<Effect> {
        let Some(pending) = self
            .pending_search
            .take_if(|p| p.generation == generation)
        else {
            tracing::debug!(
                generation,
                latest = self.search_generation,
                "discarding stale search response"
            );
            return vec![Effect::Discarded];
        };

        match outcome {
            Ok(result) => {
                self.status = SearchStatus::Ready {
                    total: result.total,
                };
                self.results = Some(result);
                self.results_query = Some(pending.query);
                vec![Effect::SearchCompleted { ok: true }]
            }
            Err(err) => {
                tracing::warn!(error = %err, "search failed");
                // Previous page stays on screen.
                self.status = SearchStatus::Failed {
                    reason: err.user_message(),
                };
                vec![Effect::SearchCompleted { ok: false }]
            }
        }
    }
}
