use crate::session::SearchStatus;

use super::grid::{
    CELL_HEIGHT, CELL_WIDTH, columns_for, first_visible_row, fmt_item_date, rows_for, truncate,
};
use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    draw_search(frame, app, chunks[1]);
    draw_grid(frame, app, chunks[2]);
    draw_footer(frame, app, chunks[3]);

    if app.session.detail().is_some() {
        modal::draw_detail(frame, app);
    }
    if app.session.console().is_open() {
        modal::draw_console(frame, app);
    }
}

fn status_style(status: &SearchStatus) -> Style {
    match status {
        SearchStatus::Idle => Style::default().fg(Color::Gray),
        SearchStatus::Loading => Style::default().fg(Color::Yellow),
        SearchStatus::Ready { .. } => Style::default().fg(Color::Green),
        SearchStatus::Failed { .. } => Style::default().fg(Color::Red),
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let s = &app.session;
    let mut spans = vec![
        Span::styled(
            "Librarian",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(s.status().label(), status_style(s.status())),
    ];
    if let Some(label) = s.window_label() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(label, Style::default().fg(Color::Gray)));
    }
    if s.selection().is_active() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("select: {}", s.selection().len()),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
    } else if !s.selection().is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} selected", s.selection().len()),
            Style::default().fg(Color::Yellow),
        ));
    }
    if !s.controls_enabled() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("busy", Style::default().fg(Color::Magenta)));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn draw_search(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search;
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(app.search_input.buf.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title("Search"),
        ),
        area,
    );
    let overlay_open = app.session.console().is_open() || app.session.detail().is_some();
    if focused && !overlay_open {
        let x = app.search_input.cursor as u16;
        frame.set_cursor_position((area.x + 1 + x, area.y + 1));
    }
}

fn draw_grid(frame: &mut ratatui::Frame, app: &mut App, area: Rect) {
    let columns = columns_for(area.width);
    app.grid_columns = columns;

    let Some(results) = app.session.results() else {
        frame.render_widget(
            Paragraph::new("No results yet.").style(Style::default().fg(Color::Gray)),
            area,
        );
        return;
    };
    if results.matches.is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing on this page.").style(Style::default().fg(Color::Gray)),
            area,
        );
        return;
    }

    let visible_rows = rows_for(area.height);
    let first_row = first_visible_row(app.cursor, columns, visible_rows);
    let now = OffsetDateTime::now_utc();
    let text_w = usize::from(CELL_WIDTH.saturating_sub(2));

    for (idx, item) in results.matches.iter().enumerate() {
        let row = idx / columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let col = idx % columns;
        let cell = Rect {
            x: area.x + (col as u16) * CELL_WIDTH,
            y: area.y + ((row - first_row) as u16) * CELL_HEIGHT,
            width: CELL_WIDTH,
            height: CELL_HEIGHT,
        }
        .intersection(area);
        if cell.is_empty() {
            continue;
        }

        let selected = app.session.is_selected(&item.key);
        let at_cursor = idx == app.cursor && app.focus == Focus::Grid;

        let mut border = Style::default().fg(Color::DarkGray);
        if selected {
            border = Style::default().fg(Color::Yellow);
        }
        if at_cursor {
            border = border.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }

        let mut lines = vec![Line::from(truncate(&item.key, text_w))];
        let date = item
            .date
            .as_deref()
            .map(|d| fmt_item_date(d, now))
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            truncate(&date, text_w),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            truncate(&item.tags.join(" "), text_w),
            Style::default().fg(Color::Blue),
        )));

        let mut block = Block::default().borders(Borders::ALL).border_style(border);
        if selected {
            block = block.title(Span::styled("*", Style::default().fg(Color::Yellow)));
        }
        frame.render_widget(Paragraph::new(lines).block(block), cell);
    }
}

fn draw_footer(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    if let Some(n) = &app.last {
        let style = if n.error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::White)
        };
        let ts = format!("{:02}:{:02}:{:02} ", n.ts.hour(), n.ts.minute(), n.ts.second());
        lines.push(Line::from(vec![
            Span::styled(ts, Style::default().fg(Color::Gray)),
            Span::styled(n.text.as_str(), style),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "/ search  n/p page  s select mode  space open/toggle  x clear  : console  r refresh  q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP)),
        area,
    );
}
