//! Layout math and cell text for the result grid.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

pub(super) const CELL_WIDTH: u16 = 26;
pub(super) const CELL_HEIGHT: u16 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Move {
    Left,
    Right,
    Up,
    Down,
}

pub(super) fn columns_for(width: u16) -> usize {
    usize::from((width / CELL_WIDTH).max(1))
}

pub(super) fn rows_for(height: u16) -> usize {
    usize::from((height / CELL_HEIGHT).max(1))
}

pub(super) fn move_cursor(cursor: usize, len: usize, columns: usize, dir: Move) -> usize {
    if len == 0 {
        return 0;
    }
    let columns = columns.max(1);
    let last = len - 1;
    let cursor = cursor.min(last);
    match dir {
        Move::Left => cursor.saturating_sub(1),
        Move::Right => (cursor + 1).min(last),
        Move::Up => cursor.checked_sub(columns).unwrap_or(cursor),
        Move::Down => {
            let next = cursor + columns;
            if next <= last { next } else { cursor }
        }
    }
}

/// First grid row to draw so the cursor row stays visible.
pub(super) fn first_visible_row(cursor: usize, columns: usize, visible_rows: usize) -> usize {
    let row = cursor / columns.max(1);
    let visible_rows = visible_rows.max(1);
    if row < visible_rows {
        0
    } else {
        row + 1 - visible_rows
    }
}

pub(super) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max <= 1 {
        return s.chars().take(max).collect();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('~');
    out
}

fn parse_item_date(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt);
    }
    // Indexers store naive timestamps, assumed UTC. Fractions are dropped.
    let head = raw.get(..19)?;
    PrimitiveDateTime::parse(
        head,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    )
        .ok()
        .map(|p| p.assume_utc())
}

/// Item dates as an age ("3d ago"); unparseable values are shown as-is.
pub(super) fn fmt_item_date(raw: &str, now: OffsetDateTime) -> String {
    let Some(dt) = parse_item_date(raw) else {
        return raw.to_string();
    };
    let secs = (now - dt).whole_seconds();
    if secs < 0 {
        return raw.get(..10).unwrap_or(raw).to_string();
    }

    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;
    if secs < 60 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{}m ago", mins)
    } else if hours < 48 {
        format!("{}h ago", hours)
    } else if days < 60 {
        format!("{}d ago", days)
    } else {
        raw.get(..10).unwrap_or(raw).to_string()
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/grid_tests.rs"]
mod tests;
