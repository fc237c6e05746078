use super::grid::{Move, move_cursor};
use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.drain_completions();
        terminal
            .draw(|f| render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit = true;
        return;
    }

    if app.session.console().is_open() {
        modal::handle_console_key(app, key);
        return;
    }
    if app.session.detail().is_some() {
        modal::handle_detail_key(app, key);
        return;
    }

    match app.focus {
        Focus::Search => handle_search_key(app, key),
        Focus::Grid => handle_grid_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Esc | KeyCode::Tab | KeyCode::Down => app.focus = Focus::Grid,
        KeyCode::Up => app.search_input.history_up(),
        KeyCode::Backspace => app.search_input.backspace(),
        KeyCode::Delete => app.search_input.delete(),
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Home => app.search_input.move_home(),
        KeyCode::End => app.search_input.move_end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            app.search_input.insert_char(c)
        }
        _ => {}
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    let len = app.page_len();
    let cols = app.grid_columns;
    match key.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Char('/') | KeyCode::Tab => app.focus = Focus::Search,
        KeyCode::Left | KeyCode::Char('h') => app.cursor = move_cursor(app.cursor, len, cols, Move::Left),
        KeyCode::Right | KeyCode::Char('l') => {
            app.cursor = move_cursor(app.cursor, len, cols, Move::Right)
        }
        KeyCode::Up | KeyCode::Char('k') => app.cursor = move_cursor(app.cursor, len, cols, Move::Up),
        KeyCode::Down | KeyCode::Char('j') => app.cursor = move_cursor(app.cursor, len, cols, Move::Down),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_cursor(),
        KeyCode::Char('n') | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('p') | KeyCode::PageUp => app.prev_page(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('s') => app.toggle_selection_mode(),
        KeyCode::Char('x') => app.clear_selection(),
        KeyCode::Char(':') | KeyCode::Char('c') => app.open_console(),
        _ => {}
    }
}
