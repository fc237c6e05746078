use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use axum::routing::{get, post};
use clap::Parser;

use super::*;

#[derive(Parser)]
#[command(name = "librarian-devserver")]
#[command(about = "In-memory librarian backend (development)", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:5000")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Number of generated fixture items
    #[arg(long, default_value_t = 60)]
    items: usize,

    /// Answer every command with HTTP 500
    #[arg(long)]
    fail_commands: bool,

    /// Delay every /api response by this many milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
}

pub(super) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/api/search", get(handlers::search))
        .route("/api/meta/:field", get(handlers::search_field))
        .route("/api/meta/:field/:value", get(handlers::search_field_value))
        .route("/api/data/:key", get(handlers::data))
        .route("/api/thumb/:key", get(handlers::thumb))
        .route("/api/preview/:key", get(handlers::preview))
        .route("/api/item/:key", get(handlers::item))
        .route("/api/cli", post(handlers::run_command))
        .with_state(state)
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    librarian::logging::init_stderr();

    let state = Arc::new(AppState {
        items: RwLock::new(fixtures::generate(args.items)),
        fail_commands: args.fail_commands,
        delay: Duration::from_millis(args.delay_ms),
    });

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    eprintln!("librarian-devserver listening on {}", local_addr);

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
