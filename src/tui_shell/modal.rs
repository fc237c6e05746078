use crate::session::{DetailPhase, PreviewState};

use super::*;

fn centered(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(6).clamp(20, max_w);
    let h = area.height.saturating_sub(6).clamp(8, max_h);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w.min(area.width),
        height: h.min(area.height),
    }
}

pub(super) fn draw_console(frame: &mut ratatui::Frame, app: &App) {
    let console = app.session.console();
    let box_area = centered(frame.area(), 90, 14);
    frame.render_widget(Clear, box_area);

    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        "Console",
        Style::default().fg(Color::Yellow),
    ));
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(inner);

    let mut lines = vec![Line::from(Span::styled(
        app.session.console_status_line(),
        Style::default().fg(Color::Gray),
    ))];
    if let Some(payload) = console.pending() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("running: {}", payload.cmd),
            Style::default().fg(Color::Cyan),
        )));
    }
    if let Some(out) = console.output() {
        let style = if out.ok {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        lines.push(Line::from(""));
        for l in out.text.lines() {
            lines.push(Line::from(Span::styled(l.to_string(), style)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter to run; Esc to close. With a selection, input is passed to `annex metadata`.",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), parts[0]);

    let prompt = "> ";
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(prompt, Style::default().fg(Color::Yellow)),
            Span::raw(app.console_input.buf.as_str()),
        ]))
        .block(Block::default().borders(Borders::ALL).title("Command")),
        parts[1],
    );
    let x = (prompt.len() + app.console_input.cursor) as u16;
    frame.set_cursor_position((parts[1].x + 1 + x, parts[1].y + 1));
}

pub(super) fn draw_detail(frame: &mut ratatui::Frame, app: &App) {
    let Some(view) = app.session.detail() else {
        return;
    };
    let box_area = centered(frame.area(), 100, 30);
    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            view.key().to_string(),
            Style::default().fg(Color::Yellow),
        ));
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let mut lines = Vec::new();

    let preview = match view.preview() {
        PreviewState::Loading => Span::styled("preview: loading...", Style::default().fg(Color::Gray)),
        PreviewState::Ready { bytes } => Span::styled(
            format!("preview: {} bytes", bytes),
            Style::default().fg(Color::Green),
        ),
        PreviewState::Failed => Span::styled("preview: unavailable", Style::default().fg(Color::DarkGray)),
    };
    lines.push(Line::from(preview));

    let mut tag_spans = vec![Span::raw("tags: ")];
    match view.phase() {
        DetailPhase::Loaded => {
            let tags = view.tags();
            if tags.is_empty() {
                tag_spans.push(Span::styled("no tags", Style::default().fg(Color::DarkGray)));
            }
            for t in tags {
                tag_spans.push(Span::styled(
                    format!(" {} ", t),
                    Style::default().fg(Color::Black).bg(Color::Blue),
                ));
                tag_spans.push(Span::raw(" "));
            }
        }
        _ => tag_spans.push(Span::styled("...", Style::default().fg(Color::Gray))),
    }
    lines.push(Line::from(tag_spans));
    lines.push(Line::from(""));

    let style = if view.phase() == DetailPhase::Failed {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    for l in view.lines() {
        lines.push(Line::from(Span::styled(l, style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "m: edit metadata of this item; Up/Down scroll; Esc close",
        Style::default().fg(Color::DarkGray),
    )));

    let scroll = app.detail_scroll.min(lines.len().saturating_sub(1)) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        inner,
    );
}

pub(super) fn handle_console_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_console(),
        KeyCode::Enter => app.dispatch_console(),
        KeyCode::Up => app.console_input.history_up(),
        KeyCode::Down => app.console_input.history_down(),
        KeyCode::Backspace => app.console_input.backspace(),
        KeyCode::Delete => app.console_input.delete(),
        KeyCode::Left => app.console_input.move_left(),
        KeyCode::Right => app.console_input.move_right(),
        KeyCode::Home => app.console_input.move_home(),
        KeyCode::End => app.console_input.move_end(),
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            app.console_input.insert_char(c)
        }
        _ => {}
    }
}

pub(super) fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_detail(),
        KeyCode::Char('m') => app.promote_detail(),
        KeyCode::Up => app.detail_scroll = app.detail_scroll.saturating_sub(1),
        KeyCode::Down => app.detail_scroll += 1,
        KeyCode::PageUp => app.detail_scroll = app.detail_scroll.saturating_sub(10),
        KeyCode::PageDown => app.detail_scroll += 10,
        _ => {}
    }
}
