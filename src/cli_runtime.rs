use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use librarian::config::ClientConfig;

use crate::Commands;

#[derive(Parser)]
#[command(name = "librarian")]
#[command(about = "Browse and tag a git-annex media library", long_about = None)]
pub(crate) struct Cli {
    /// Config file (JSON). Falls back to $LIBRARIAN_CONFIG, then defaults.
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, e.g. http://127.0.0.1:5000
    #[arg(long, value_name = "URL", global = true)]
    url: Option<String>,

    /// Items per page
    #[arg(long = "page-size", value_name = "N", global = true)]
    page_size: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let cfg = ClientConfig::load(cli.config.as_deref())
        .context("load config")?
        .with_overrides(cli.url, cli.page_size)
        .context("apply command line overrides")?;

    let command = cli.command.unwrap_or(Commands::Tui);
    if let Commands::Tui = command {
        librarian::logging::init_for_shell(cfg.log_file.as_deref())?;
        tracing::info!(base_url = %cfg.base_url, "starting shell");
    } else {
        librarian::logging::init_stderr();
    }

    crate::cli_exec::handle_command(&cfg, command)
}
