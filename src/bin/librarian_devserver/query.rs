//! Query matching for the fixture index.
//!
//! Terms are whitespace separated and all must match. `field:value` compares
//! against the item's metadata values (case-insensitive); `field:` or
//! `field:*` only requires the field to be set. A bare word matches a tag or
//! a substring of the key.

use super::*;

pub(super) const DEFAULT_LIMIT: usize = 20;

fn term_matches(item: &FixtureItem, term: &str) -> bool {
    match term.split_once(':') {
        Some((field, value)) => {
            let values = item.values(field);
            if value.is_empty() || value == "*" {
                return !values.is_empty();
            }
            values.iter().any(|v| v.eq_ignore_ascii_case(value))
        }
        None => {
            item.tags().iter().any(|t| t.eq_ignore_ascii_case(term))
                || item.key.to_lowercase().contains(&term.to_lowercase())
        }
    }
}

pub(super) fn matches(item: &FixtureItem, q: &str) -> bool {
    q.split_whitespace().all(|term| term_matches(item, term))
}

/// Response body of a search: one window of the matching items.
pub(super) fn page(items: &[FixtureItem], q: &str, offset: usize, limit: usize) -> Value {
    let hits: Vec<&FixtureItem> = items.iter().filter(|i| matches(i, q)).collect();
    let total = hits.len();
    let window: Vec<Value> = hits
        .iter()
        .enumerate()
        .skip(offset)
        .take(limit)
        .map(|(idx, item)| item.to_match(idx + 1))
        .collect();
    let end = offset + window.len();

    json!({
        "total": total,
        "start": offset,
        "end": end,
        "q": q,
        "matches": window,
    })
}

/// Lenient integer params: anything unparseable falls back to the default.
pub(super) fn int_param(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
#[path = "../../tests/bin/librarian_devserver/query_tests.rs"]
mod tests;
