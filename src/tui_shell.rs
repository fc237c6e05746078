//! Terminal front end. Everything here is a projection of [`Session`];
//! keys become session transitions and the resulting requests go to the
//! [`Worker`].

use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use time::OffsetDateTime;

use crate::config::ClientConfig;
use crate::remote::LibrarianClient;
use crate::session::{Completion, Effect, Request, Session};
use crate::worker::Worker;

mod app;
use app::{App, Focus};

mod event_loop;

mod grid;

mod input;
use input::Input;

mod modal;

mod render;

pub fn run(cfg: &ClientConfig) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let client = Arc::new(LibrarianClient::from_config(cfg)?);
    let (tx, rx) = mpsc::channel();
    let worker = Worker::new(client, tx);
    let mut app = App::new(Session::from_config(cfg), worker, rx);

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}
