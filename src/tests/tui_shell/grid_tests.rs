use super::*;

#[test]
fn cursor_moves_within_bounds() {
    // 7 items in rows of 3:
    // 0 1 2
    // 3 4 5
    // 6
    assert_eq!(move_cursor(0, 7, 3, Move::Left), 0);
    assert_eq!(move_cursor(2, 7, 3, Move::Right), 3);
    assert_eq!(move_cursor(6, 7, 3, Move::Right), 6);
    assert_eq!(move_cursor(1, 7, 3, Move::Up), 1);
    assert_eq!(move_cursor(4, 7, 3, Move::Up), 1);
    assert_eq!(move_cursor(3, 7, 3, Move::Down), 6);
    assert_eq!(move_cursor(4, 7, 3, Move::Down), 4);
    assert_eq!(move_cursor(5, 0, 3, Move::Down), 0);
}

#[test]
fn stale_cursor_is_clamped_to_page() {
    assert_eq!(move_cursor(20, 4, 2, Move::Left), 2);
}

#[test]
fn visible_rows_follow_cursor() {
    assert_eq!(first_visible_row(0, 4, 3), 0);
    assert_eq!(first_visible_row(11, 4, 3), 0);
    assert_eq!(first_visible_row(12, 4, 3), 1);
    assert_eq!(first_visible_row(27, 4, 3), 4);
}

#[test]
fn columns_never_drop_to_zero() {
    assert_eq!(columns_for(10), 1);
    assert_eq!(columns_for(CELL_WIDTH * 4 + 3), 4);
}

#[test]
fn truncate_marks_cut_text() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("SHA256E-s1234--abcdef.jpg", 10), "SHA256E-s~");
}

#[test]
fn item_dates_render_as_age() {
    let now = OffsetDateTime::parse("2024-03-10T12:00:00Z", &Rfc3339).expect("now");
    assert_eq!(fmt_item_date("2024-03-10T11:59:30Z", now), "just now");
    assert_eq!(fmt_item_date("2024-03-10T11:15:00Z", now), "45m ago");
    assert_eq!(fmt_item_date("2024-03-07T12:00:00", now), "3d ago");
    assert_eq!(fmt_item_date("2020-01-01T00:00:00", now), "2020-01-01");
    assert_eq!(fmt_item_date("sometime", now), "sometime");
}

#[test]
fn naive_dates_ignore_fractional_seconds() {
    let now = OffsetDateTime::parse("2024-03-10T12:00:00Z", &Rfc3339).expect("now");
    assert_eq!(fmt_item_date("2024-03-10T10:00:00.250000", now), "2h ago");
    assert_eq!(fmt_item_date("2024-03-07T12:00:00.5", now), "3d ago");
    assert_eq!(fmt_item_date("2024-03-07 12:00:00", now), "2024-03-07 12:00:00");
}
