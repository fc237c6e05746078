use proptest::prelude::*;

use super::*;
use crate::model::{CommandRequest, CommandResult, Item, Metadata};
use crate::remote::RemoteError;

fn item(key: &str) -> Item {
    Item {
        key: key.to_string(),
        date: None,
        tags: Vec::new(),
        rank: None,
    }
}

fn page(total: u64, keys: &[&str]) -> SearchResult {
    SearchResult {
        total,
        matches: keys.iter().map(|k| item(k)).collect(),
        ..Default::default()
    }
}

fn server_error() -> RemoteError {
    RemoteError::Status {
        label: "test".to_string(),
        code: 500,
        reason: "Internal Server Error".to_string(),
    }
}

fn session() -> Session {
    Session::new(QueryState::new("state:new", 28))
}

fn generation_of(req: &Request) -> u64 {
    match req {
        Request::Search { generation, .. } => *generation,
        other => panic!("expected search request, got {:?}", other),
    }
}

fn ticket_of(req: &Request) -> u64 {
    match req {
        Request::Command { ticket, .. }
        | Request::Metadata { ticket, .. }
        | Request::Preview { ticket, .. } => *ticket,
        other => panic!("expected ticketed request, got {:?}", other),
    }
}

fn complete_search(s: &mut Session, req: &Request, result: SearchResult) -> Vec<Effect> {
    s.apply(
        Completion::Search {
            generation: generation_of(req),
            outcome: Ok(result),
        },
        Instant::now(),
    )
}

fn select(s: &mut Session, keys: &[&str]) {
    if !s.selection().is_active() {
        s.toggle_selection_mode();
    }
    for k in keys {
        s.toggle_item(k);
    }
}

// Search and paging

#[test]
fn search_shows_results_and_total() {
    let mut s = session();
    let req = s.refresh();
    assert_eq!(s.status(), &SearchStatus::Loading);
    assert!(!s.controls_enabled());

    let effects = complete_search(&mut s, &req, page(3, &["A", "B", "C"]));
    assert_eq!(effects, vec![Effect::SearchCompleted { ok: true }]);
    assert_eq!(s.status().label(), "3 results");
    assert_eq!(s.results().map(|r| r.matches.len()), Some(3));
    assert!(s.controls_enabled());
}

#[test]
fn search_request_carries_query_params() {
    let mut s = session();
    match s.refresh() {
        Request::Search { query, .. } => {
            assert_eq!(query.q, "state:new");
            assert_eq!(query.offset, None);
            assert_eq!(query.limit, Some(28));
        }
        other => panic!("unexpected request {:?}", other),
    }
    match s.next_page() {
        Request::Search { query, .. } => assert_eq!(query.offset, Some(28)),
        other => panic!("unexpected request {:?}", other),
    }
}

#[test]
fn empty_result_is_not_an_error() {
    let mut s = session();
    let req = s.set_query("tag:nothing");
    complete_search(&mut s, &req, page(0, &[]));
    assert_eq!(s.status(), &SearchStatus::Ready { total: 0 });
    assert_eq!(s.status().label(), "0 results");
}

#[test]
fn failed_search_keeps_previous_results() {
    let mut s = session();
    let first = s.refresh();
    complete_search(&mut s, &first, page(2, &["A", "B"]));

    let second = s.next_page();
    let effects = s.apply(
        Completion::Search {
            generation: generation_of(&second),
            outcome: Err(server_error()),
        },
        Instant::now(),
    );
    assert_eq!(effects, vec![Effect::SearchCompleted { ok: false }]);
    assert!(matches!(s.status(), SearchStatus::Failed { .. }));
    assert_eq!(s.results().map(|r| r.total), Some(2));
    assert!(s.controls_enabled());
}

#[test]
fn stale_search_response_is_discarded() {
    let mut s = session();
    let slow = s.set_query("tag:old");
    let fast = s.set_query("tag:new");

    complete_search(&mut s, &fast, page(1, &["NEW"]));
    let effects = complete_search(&mut s, &slow, page(5, &["OLD"]));

    assert_eq!(effects, vec![Effect::Discarded]);
    assert_eq!(s.results().map(|r| r.matches[0].key.as_str()), Some("NEW"));
    assert_eq!(s.status(), &SearchStatus::Ready { total: 1 });
}

#[test]
fn stale_response_while_newer_is_pending_keeps_loading() {
    let mut s = session();
    let slow = s.refresh();
    let _newer = s.next_page();

    let effects = complete_search(&mut s, &slow, page(9, &["X"]));
    assert_eq!(effects, vec![Effect::Discarded]);
    assert_eq!(s.status(), &SearchStatus::Loading);
    assert!(s.results().is_none());
    assert!(!s.controls_enabled());
}

#[test]
fn window_label_uses_query_of_the_fetched_page() {
    let mut s = session();
    let req = s.next_page();
    complete_search(&mut s, &req, page(40, &["A"]));
    assert_eq!(s.window_label().as_deref(), Some("28 to 56 of 40"));

    // A newer request in flight must not relabel the page on screen.
    let _ = s.next_page();
    assert_eq!(s.window_label().as_deref(), Some("28 to 56 of 40"));
}

#[test]
fn paging_keeps_offset_non_negative() {
    let mut s = session();
    for _ in 0..3 {
        s.prev_page();
        assert_eq!(s.query().offset, 0);
    }
    s.next_page();
    s.prev_page();
    s.prev_page();
    assert_eq!(s.query().offset, 0);
}

proptest! {
    #[test]
    fn offset_stays_non_negative_under_any_paging(
        limit in 1u32..200,
        moves in proptest::collection::vec(any::<bool>(), 0..40),
    ) {
        let mut s = Session::new(QueryState::new("state:new", limit));
        let mut expected: u64 = 0;
        for forward in moves {
            if forward {
                s.next_page();
                expected += u64::from(limit);
            } else {
                s.prev_page();
                expected = expected.saturating_sub(u64::from(limit));
            }
            prop_assert_eq!(s.query().offset, expected);
            prop_assert_eq!(s.query().limit, limit);
        }
    }
}

// Selection

#[test]
fn toggling_mode_off_empties_selection() {
    let mut s = session();
    select(&mut s, &["A", "B", "C"]);
    assert_eq!(s.selection().len(), 3);

    assert!(!s.toggle_selection_mode());
    assert!(s.selection().is_empty());
}

fn any_keys() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-H]{1,3}", 0..12)
}

proptest! {
    #[test]
    fn toggling_mode_off_empties_any_selection(keys in any_keys()) {
        let mut s = session();
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        select(&mut s, &refs);

        prop_assert!(!s.toggle_selection_mode());
        prop_assert!(s.selection().is_empty());
        prop_assert!(!s.selection().is_active());
    }

    #[test]
    fn select_only_yields_exactly_that_key(keys in any_keys(), k in "[A-K]{1,3}") {
        let mut s = session();
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        select(&mut s, &refs);

        s.select_only(&k);
        prop_assert_eq!(s.selected_keys(), vec![k.clone()]);
        prop_assert!(s.selection().is_active());
    }

    #[test]
    fn scoped_dispatch_carries_exactly_the_selection(
        keys in proptest::collection::btree_set("[A-H]{1,3}", 1..8),
    ) {
        let mut s = session();
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        select(&mut s, &refs);
        s.open_console();

        match s.dispatch("tag=x") {
            Some(Request::Command { payload, .. }) => {
                prop_assert_eq!(payload.cmd, "annex metadata tag=x");
                prop_assert_eq!(payload.keys, Some(keys.into_iter().collect::<Vec<_>>()));
            }
            other => prop_assert!(false, "unexpected dispatch {:?}", other),
        }
    }
}

#[test]
fn toggle_item_is_ignored_outside_selection_mode() {
    let mut s = session();
    assert!(!s.toggle_item("A"));
    assert!(s.selection().is_empty());
}

#[test]
fn select_only_yields_exactly_one_key() {
    let mut s = session();
    select(&mut s, &["A", "B"]);
    s.select_only("K");
    assert_eq!(s.selection().to_vec(), vec!["K".to_string()]);
    assert!(s.selection().is_active());
}

#[test]
fn clear_keeps_selection_mode() {
    let mut s = session();
    select(&mut s, &["A"]);
    s.clear_selection();
    assert!(s.selection().is_empty());
    assert!(s.selection().is_active());
}

#[test]
fn selection_survives_paging_and_research() {
    let mut s = session();
    let req = s.refresh();
    complete_search(&mut s, &req, page(60, &["A", "B"]));
    select(&mut s, &["A"]);

    let req = s.next_page();
    complete_search(&mut s, &req, page(60, &["C", "D"]));
    let req = s.set_query("tag:other");
    complete_search(&mut s, &req, page(1, &["E"]));

    assert!(s.selection().contains("A"));
}

#[test]
fn activate_item_toggles_in_selection_mode_and_opens_detail_otherwise() {
    let mut s = session();
    let reqs = s.activate_item("A");
    assert_eq!(reqs.len(), 2);
    assert_eq!(s.detail_phase(), DetailPhase::Opening);
    s.close_detail();

    s.toggle_selection_mode();
    assert!(s.activate_item("A").is_empty());
    assert!(s.selection().contains("A"));
    assert_eq!(s.detail_phase(), DetailPhase::Closed);
    s.activate_item("A");
    assert!(!s.selection().contains("A"));
}

// Command dispatch

#[test]
fn dispatch_with_selection_wraps_command() {
    let mut s = session();
    select(&mut s, &["B", "C"]);
    s.open_console();
    assert_eq!(s.console_status_line(), "2 items selected");

    match s.dispatch("tag=reviewed") {
        Some(Request::Command { payload, .. }) => {
            assert_eq!(payload.cmd, "annex metadata tag=reviewed");
            assert_eq!(payload.keys, Some(vec!["B".to_string(), "C".to_string()]));
        }
        other => panic!("unexpected dispatch {:?}", other),
    }
    assert!(!s.controls_enabled());
}

#[test]
fn dispatch_without_selection_is_verbatim() {
    let mut s = session();
    s.open_console();
    match s.dispatch("annex sync") {
        Some(Request::Command { payload, .. }) => {
            assert_eq!(payload.cmd, "annex sync");
            assert_eq!(payload.keys, None);
        }
        other => panic!("unexpected dispatch {:?}", other),
    }
}

#[test]
fn second_dispatch_is_refused_while_in_flight() {
    let mut s = session();
    s.open_console();
    assert!(s.dispatch("a").is_some());
    assert!(s.dispatch("b").is_none());
}

#[test]
fn successful_command_clears_selection_and_auto_dismisses() {
    let mut s = session().with_dismiss_delay(Duration::from_millis(1000));
    select(&mut s, &["B", "C"]);
    s.open_console();
    let req = s.dispatch("tag=reviewed").expect("dispatch");

    let t0 = Instant::now();
    let effects = s.apply(
        Completion::Command {
            ticket: ticket_of(&req),
            outcome: Ok(CommandResult {
                message: "2 updated".to_string(),
                result: true,
            }),
        },
        t0,
    );

    assert!(matches!(effects.as_slice(), [Effect::Submit(Request::Search { .. })]));
    assert_eq!(s.console().output().map(|m| m.text.as_str()), Some("2 updated"));
    assert!(s.selection().is_empty());
    assert!(s.console().is_open());

    assert!(!s.tick(t0 + Duration::from_millis(500)));
    assert!(s.console().is_open());
    assert!(s.tick(t0 + Duration::from_millis(1000)));
    assert!(!s.console().is_open());
}

#[test]
fn rejected_command_stays_open_and_still_clears_selection() {
    let mut s = session();
    select(&mut s, &["A"]);
    s.open_console();
    let req = s.dispatch("tag=bad value").expect("dispatch");

    let t0 = Instant::now();
    s.apply(
        Completion::Command {
            ticket: ticket_of(&req),
            outcome: Ok(CommandResult {
                message: "failed on A".to_string(),
                result: false,
            }),
        },
        t0,
    );

    assert!(s.selection().is_empty());
    assert_eq!(
        s.console().output(),
        Some(&ConsoleMessage {
            text: "failed on A".to_string(),
            ok: false
        })
    );
    assert_eq!(s.console().dismiss_at(), None);
    assert!(!s.tick(t0 + Duration::from_secs(60)));
    assert!(s.console().is_open());
}

#[test]
fn http_failure_keeps_selection_and_console() {
    let mut s = session();
    select(&mut s, &["B", "C"]);
    s.open_console();
    let req = s.dispatch("tag=reviewed").expect("dispatch");

    let effects = s.apply(
        Completion::Command {
            ticket: ticket_of(&req),
            outcome: Err(server_error()),
        },
        Instant::now(),
    );

    assert!(effects.is_empty());
    assert_eq!(
        s.console().output().map(|m| m.text.as_str()),
        Some("Internal Server Error")
    );
    assert_eq!(s.selection().len(), 2);
    assert!(s.console().is_open());
    assert!(s.controls_enabled());
}

#[test]
fn timed_out_command_reenables_controls() {
    let mut s = session();
    s.open_console();
    let req = s.dispatch("annex sync").expect("dispatch");
    s.apply(
        Completion::Command {
            ticket: ticket_of(&req),
            outcome: Err(RemoteError::Timeout {
                label: "run command".to_string(),
            }),
        },
        Instant::now(),
    );
    assert!(s.controls_enabled());
    assert_eq!(
        s.console().output().map(|m| m.text.as_str()),
        Some("Request timed out")
    );
}

#[test]
fn unknown_command_ticket_is_discarded() {
    let mut s = session();
    select(&mut s, &["A"]);
    let effects = s.apply(
        Completion::Command {
            ticket: 999,
            outcome: Ok(CommandResult {
                message: "late".to_string(),
                result: true,
            }),
        },
        Instant::now(),
    );
    assert_eq!(effects, vec![Effect::Discarded]);
    assert_eq!(s.selection().len(), 1);
}

#[test]
fn reopening_console_cancels_pending_dismiss() {
    let mut s = session();
    s.open_console();
    let req = s.dispatch("annex sync").expect("dispatch");
    let t0 = Instant::now();
    s.apply(
        Completion::Command {
            ticket: ticket_of(&req),
            outcome: Ok(CommandResult {
                message: "ok".to_string(),
                result: true,
            }),
        },
        t0,
    );
    s.open_console();
    assert!(!s.tick(t0 + Duration::from_secs(5)));
    assert!(s.console().is_open());
}

fn ok_result(message: &str) -> Result<CommandResult, RemoteError> {
    Ok(CommandResult {
        message: message.to_string(),
        result: true,
    })
}

#[test]
fn selection_and_console_are_locked_while_command_runs() {
    let mut s = session().with_dismiss_delay(Duration::from_millis(1000));
    select(&mut s, &["B"]);
    s.open_console();
    let req = s.dispatch("tag=a").expect("dispatch");
    s.close_console();

    s.open_detail("K");
    assert!(!s.promote_detail_to_selection());
    assert_eq!(s.detail_phase(), DetailPhase::Opening);
    assert!(!s.clear_selection());
    assert!(!s.open_console());
    assert_eq!(s.selected_keys(), vec!["B".to_string()]);
    assert!(!s.console().is_open());

    let t0 = Instant::now();
    s.apply(
        Completion::Command {
            ticket: ticket_of(&req),
            outcome: ok_result("1 updated"),
        },
        t0,
    );
    assert!(s.selection().is_empty());
    assert_eq!(s.console().dismiss_at(), None);

    // Now the detail view can be promoted; the next command is scoped to it.
    assert!(s.promote_detail_to_selection());
    assert!(s.console().is_open());
    assert_eq!(s.console_status_line(), "1 items selected");
    assert!(!s.tick(t0 + Duration::from_secs(5)));
    match s.dispatch("tag=b") {
        Some(Request::Command { payload, .. }) => {
            assert_eq!(payload.cmd, "annex metadata tag=b");
            assert_eq!(payload.keys, Some(vec!["K".to_string()]));
        }
        other => panic!("unexpected dispatch {:?}", other),
    }
}

#[test]
fn result_keeps_a_selection_changed_in_flight() {
    let mut s = session();
    select(&mut s, &["B"]);
    s.open_console();
    let req = s.dispatch("tag=a").expect("dispatch");
    s.toggle_item("C");

    s.apply(
        Completion::Command {
            ticket: ticket_of(&req),
            outcome: ok_result("1 updated"),
        },
        Instant::now(),
    );
    assert_eq!(s.selected_keys(), vec!["B".to_string(), "C".to_string()]);
    assert_eq!(s.console_status_line(), "2 items selected");
}

#[test]
fn console_header_tracks_selection_after_rejected_command() {
    let mut s = session();
    select(&mut s, &["B", "C"]);
    s.open_console();
    assert_eq!(s.console_status_line(), "2 items selected");
    let req = s.dispatch("tag=bad").expect("dispatch");

    s.apply(
        Completion::Command {
            ticket: ticket_of(&req),
            outcome: Ok(CommandResult {
                message: "failed".to_string(),
                result: false,
            }),
        },
        Instant::now(),
    );
    assert!(s.console().is_open());
    assert_eq!(s.console_status_line(), "0 items selected");

    match s.dispatch("annex sync") {
        Some(Request::Command { payload, .. }) => {
            assert_eq!(payload, CommandRequest::raw("annex sync"));
        }
        other => panic!("unexpected dispatch {:?}", other),
    }
}

#[test]
fn metadata_command_without_selection_is_refused() {
    let mut s = session();
    s.open_console();

    assert!(s.dispatch("annex metadata tag=x").is_none());
    assert!(s.dispatch("  annex  metadata").is_none());
    assert_eq!(
        s.console().output(),
        Some(&ConsoleMessage {
            text: METADATA_NEEDS_SELECTION.to_string(),
            ok: false
        })
    );
    assert!(s.controls_enabled());
    assert!(s.console().pending().is_none());

    assert!(s.dispatch("annex metadatafoo").is_some());
}

// Detail view

fn metadata_with_tags() -> Metadata {
    serde_json::from_value(serde_json::json!({
        "git-annex": {"tag": ["cats"]}
    }))
    .expect("metadata")
}

#[test]
fn detail_loads_metadata_for_its_key() {
    let mut s = session();
    let reqs = s.open_detail("K");
    assert_eq!(s.detail_phase(), DetailPhase::Opening);

    s.apply(
        Completion::Metadata {
            ticket: ticket_of(&reqs[0]),
            key: "K".to_string(),
            outcome: Ok(metadata_with_tags()),
        },
        Instant::now(),
    );
    let view = s.detail().expect("detail open");
    assert_eq!(view.phase(), DetailPhase::Loaded);
    assert_eq!(view.tags(), vec!["cats".to_string()]);

    s.apply(
        Completion::Preview {
            ticket: ticket_of(&reqs[1]),
            key: "K".to_string(),
            outcome: Ok(vec![0u8; 16]),
        },
        Instant::now(),
    );
    assert_eq!(
        s.detail().map(|d| d.preview()),
        Some(PreviewState::Ready { bytes: 16 })
    );
}

#[test]
fn late_metadata_for_closed_view_is_discarded() {
    let mut s = session();
    let reqs = s.open_detail("K1");
    s.close_detail();
    let effects = s.apply(
        Completion::Metadata {
            ticket: ticket_of(&reqs[0]),
            key: "K1".to_string(),
            outcome: Ok(metadata_with_tags()),
        },
        Instant::now(),
    );
    assert_eq!(effects, vec![Effect::Discarded]);
    assert_eq!(s.detail_phase(), DetailPhase::Closed);
}

#[test]
fn late_metadata_is_not_applied_to_reopened_view() {
    let mut s = session();
    let old = s.open_detail("K1");
    s.close_detail();
    let _new = s.open_detail("K2");

    let effects = s.apply(
        Completion::Metadata {
            ticket: ticket_of(&old[0]),
            key: "K1".to_string(),
            outcome: Ok(metadata_with_tags()),
        },
        Instant::now(),
    );
    assert_eq!(effects, vec![Effect::Discarded]);
    assert_eq!(s.detail().map(|d| d.key()), Some("K2"));
    assert_eq!(s.detail_phase(), DetailPhase::Opening);
}

#[test]
fn same_key_reopened_ignores_earlier_ticket() {
    let mut s = session();
    let old = s.open_detail("K");
    let _new = s.open_detail("K");
    let effects = s.apply(
        Completion::Metadata {
            ticket: ticket_of(&old[0]),
            key: "K".to_string(),
            outcome: Ok(metadata_with_tags()),
        },
        Instant::now(),
    );
    assert_eq!(effects, vec![Effect::Discarded]);
    assert_eq!(s.detail_phase(), DetailPhase::Opening);
}

#[test]
fn metadata_failure_is_shown_in_view() {
    let mut s = session();
    let reqs = s.open_detail("K");
    s.apply(
        Completion::Metadata {
            ticket: ticket_of(&reqs[0]),
            key: "K".to_string(),
            outcome: Err(server_error()),
        },
        Instant::now(),
    );
    assert_eq!(s.detail_phase(), DetailPhase::Failed);
    let lines = s.detail().map(|d| d.lines()).unwrap_or_default();
    assert_eq!(lines, vec!["Failed to load metadata: Internal Server Error".to_string()]);
}

#[test]
fn failed_preview_is_not_an_error_state() {
    let mut s = session();
    let reqs = s.open_detail("K");
    s.apply(
        Completion::Preview {
            ticket: ticket_of(&reqs[1]),
            key: "K".to_string(),
            outcome: Err(server_error()),
        },
        Instant::now(),
    );
    assert_eq!(s.detail_phase(), DetailPhase::Opening);
    assert_eq!(s.detail().map(|d| d.preview()), Some(PreviewState::Failed));
}

#[test]
fn promote_to_selection_replaces_selection_and_opens_console() {
    let mut s = session();
    select(&mut s, &["A", "B"]);
    s.toggle_selection_mode();
    s.open_detail("K");

    assert!(s.promote_detail_to_selection());
    assert_eq!(s.selection().to_vec(), vec!["K".to_string()]);
    assert_eq!(s.detail_phase(), DetailPhase::Closed);
    assert!(s.console().is_open());
    assert_eq!(s.console_status_line(), "1 items selected");
}

#[test]
fn promote_without_detail_is_a_no_op() {
    let mut s = session();
    assert!(!s.promote_detail_to_selection());
    assert!(s.selection().is_empty());
    assert!(!s.console().is_open());
}
