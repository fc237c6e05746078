use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Focus {
    Grid,
    Search,
}

#[derive(Clone, Debug)]
pub(super) struct Notice {
    pub(super) ts: OffsetDateTime,
    pub(super) text: String,
    pub(super) error: bool,
}

pub(super) struct App {
    pub(super) session: Session,
    worker: Worker,
    completions: mpsc::Receiver<Completion>,

    pub(super) focus: Focus,
    pub(super) search_input: Input,
    pub(super) console_input: Input,

    /// Index into the current page's matches.
    pub(super) cursor: usize,
    /// Columns the grid was last drawn with; drives Up/Down movement.
    pub(super) grid_columns: usize,

    pub(super) detail_scroll: usize,
    pub(super) last: Option<Notice>,

    pub(super) quit: bool,
}

impl App {
    pub(super) fn new(
        session: Session,
        worker: Worker,
        completions: mpsc::Receiver<Completion>,
    ) -> Self {
        let mut search_input = Input::default();
        search_input.set(session.query().query.clone());

        let mut app = Self {
            session,
            worker,
            completions,
            focus: Focus::Search,
            search_input,
            console_input: Input::default(),
            cursor: 0,
            grid_columns: 1,
            detail_scroll: 0,
            last: None,
            quit: false,
        };
        let req = app.session.refresh();
        app.submit(req);
        app
    }

    pub(super) fn submit(&self, req: Request) {
        self.worker.submit(req);
    }

    pub(super) fn notify(&mut self, text: impl Into<String>, error: bool) {
        self.last = Some(Notice {
            ts: OffsetDateTime::now_utc(),
            text: text.into(),
            error,
        });
    }

    /// Applies every completion that has arrived since the last frame.
    pub(super) fn drain_completions(&mut self) {
        while let Ok(completion) = self.completions.try_recv() {
            let effects = self.session.apply(completion, Instant::now());
            self.handle_effects(effects);
        }
        self.session.tick(Instant::now());
    }

    fn handle_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit(req) => self.submit(req),
                Effect::SearchCompleted { ok: true } => {
                    let len = self.page_len();
                    if self.cursor >= len {
                        self.cursor = len.saturating_sub(1);
                    }
                }
                Effect::SearchCompleted { ok: false } => {
                    let label = self.session.status().label();
                    self.notify(label, true);
                }
                Effect::Discarded => {}
            }
        }
    }

    pub(super) fn page_len(&self) -> usize {
        self.session
            .results()
            .map(|r| r.matches.len())
            .unwrap_or(0)
    }

    pub(super) fn key_at_cursor(&self) -> Option<String> {
        self.session
            .results()
            .and_then(|r| r.matches.get(self.cursor))
            .map(|i| i.key.clone())
    }

    fn require_controls(&mut self) -> bool {
        if self.session.controls_enabled() {
            return true;
        }
        self.notify("busy: waiting for the backend", true);
        false
    }

    // Transitions bound to keys.

    pub(super) fn submit_search(&mut self) {
        if !self.require_controls() {
            return;
        }
        let text = self.search_input.buf.trim().to_string();
        self.search_input.push_history(&text);
        let req = self.session.set_query(text);
        self.cursor = 0;
        self.submit(req);
    }

    pub(super) fn next_page(&mut self) {
        if !self.require_controls() {
            return;
        }
        let req = self.session.next_page();
        self.cursor = 0;
        self.submit(req);
    }

    pub(super) fn prev_page(&mut self) {
        if !self.require_controls() {
            return;
        }
        let req = self.session.prev_page();
        self.cursor = 0;
        self.submit(req);
    }

    pub(super) fn refresh(&mut self) {
        if !self.require_controls() {
            return;
        }
        let req = self.session.refresh();
        self.submit(req);
    }

    pub(super) fn toggle_selection_mode(&mut self) {
        if !self.require_controls() {
            return;
        }
        let active = self.session.toggle_selection_mode();
        self.notify(
            if active {
                "selection mode on"
            } else {
                "selection mode off (selection cleared)"
            },
            false,
        );
    }

    pub(super) fn clear_selection(&mut self) {
        if !self.session.clear_selection() {
            self.notify("busy: a command is running", true);
            return;
        }
        self.notify("selection cleared", false);
    }

    pub(super) fn activate_cursor(&mut self) {
        let Some(key) = self.key_at_cursor() else {
            return;
        };
        if self.session.selection().is_active() && !self.require_controls() {
            return;
        }
        let reqs = self.session.activate_item(&key);
        if !reqs.is_empty() {
            self.detail_scroll = 0;
        }
        self.worker.submit_all(reqs);
    }

    pub(super) fn open_console(&mut self) {
        if !self.session.open_console() {
            self.notify("busy: a command is running", true);
            return;
        }
        self.console_input.clear();
    }

    pub(super) fn close_console(&mut self) {
        self.session.close_console();
    }

    pub(super) fn dispatch_console(&mut self) {
        let text = self.console_input.buf.trim().to_string();
        if text.is_empty() {
            return;
        }
        let Some(req) = self.session.dispatch(&text) else {
            if self.session.console().pending().is_some() {
                self.notify("a command is already running", true);
            }
            return;
        };
        self.console_input.push_history(&text);
        self.console_input.clear();
        self.submit(req);
    }

    pub(super) fn close_detail(&mut self) {
        self.session.close_detail();
    }

    pub(super) fn promote_detail(&mut self) {
        if self.session.promote_detail_to_selection() {
            self.console_input.clear();
        } else if self.session.console().pending().is_some() {
            self.notify("busy: a command is running", true);
        }
    }
}
