use std::path::PathBuf;

use clap::Subcommand;

mod cli_exec;
mod cli_runtime;

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive browser (default)
    Tui,

    /// Run a search and print one page of matches
    Search {
        query: String,
        /// Index of the first match to return
        #[arg(long)]
        offset: Option<u64>,
        /// Page size (defaults to config page_size)
        #[arg(long)]
        limit: Option<u32>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Search by a single metadata field (`field:value`)
    Meta {
        field: String,
        value: Option<String>,
        #[arg(long)]
        offset: Option<u64>,
        #[arg(long)]
        limit: Option<u32>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show metadata for one item
    Show {
        key: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Send a command to the backend
    ///
    /// With one or more --key, the command is scoped to those items and
    /// rewritten to `annex metadata <cmd>`.
    Run {
        cmd: String,
        /// Item key to scope the command to (repeatable)
        #[arg(long = "key", value_name = "KEY")]
        keys: Vec<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Download an item's thumbnail
    Thumb {
        key: String,
        #[arg(long)]
        out: PathBuf,
    },

    /// Download an item's preview image
    Preview {
        key: String,
        #[arg(long)]
        out: PathBuf,
    },

    /// Download an item's original file
    Item {
        key: String,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
