use std::path::Path;

use anyhow::{Context, Result};

use librarian::config::ClientConfig;
use librarian::model::{CommandRequest, METADATA_COMMAND_PREFIX, QueryState, SearchResult};
use librarian::remote::LibrarianClient;

use crate::Commands;

pub(crate) fn handle_command(cfg: &ClientConfig, command: Commands) -> Result<()> {
    if let Commands::Tui = command {
        return librarian::tui_shell::run(cfg);
    }
    let client = LibrarianClient::from_config(cfg)?;

    match command {
        Commands::Tui => {}
        Commands::Search {
            query,
            offset,
            limit,
            json,
        } => {
            let mut state = QueryState::new(query, limit.unwrap_or(cfg.page_size));
            state.offset = offset.unwrap_or(0);
            let res = client.search(&state.to_search_query())?;
            print_results(&res, &state, json)?;
        }
        Commands::Meta {
            field,
            value,
            offset,
            limit,
            json,
        } => {
            let limit = limit.unwrap_or(cfg.page_size);
            let res = client.search_meta(&field, value.as_deref(), offset, Some(limit))?;
            let q = match &value {
                Some(v) => format!("{}:{}", field, v),
                None => field.clone(),
            };
            let mut state = QueryState::new(q, limit);
            state.offset = offset.unwrap_or(0);
            print_results(&res, &state, json)?;
        }
        Commands::Show { key, json } => {
            let meta = client.metadata(&key)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&meta).context("serialize metadata json")?
                );
            } else {
                println!("{}", key);
                let tags = meta.tags();
                if tags.is_empty() {
                    println!("tags: (none)");
                } else {
                    println!("tags: {}", tags.join(" "));
                }
                for line in meta.format_lines() {
                    println!("{}", line);
                }
            }
        }
        Commands::Run { cmd, keys, json } => {
            if keys.is_empty() && CommandRequest::targets_metadata(&cmd) {
                anyhow::bail!("`{}` needs at least one --key", METADATA_COMMAND_PREFIX);
            }
            let req = CommandRequest::scoped(&cmd, keys);
            let res = client.run_command(&req)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&res).context("serialize command result json")?
                );
            } else if !res.message.is_empty() {
                println!("{}", res.message);
            }
            if !res.result {
                anyhow::bail!("command failed: {}", req.cmd);
            }
        }
        Commands::Thumb { key, out } => {
            let bytes = client.thumb(&key)?;
            write_out(&out, &bytes)?;
        }
        Commands::Preview { key, out } => {
            let bytes = client.preview(&key)?;
            write_out(&out, &bytes)?;
        }
        Commands::Item { key, out } => {
            let bytes = client.item(&key)?;
            write_out(&out, &bytes)?;
        }
    }

    Ok(())
}

fn print_results(res: &SearchResult, state: &QueryState, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(res).context("serialize search json")?
        );
        return Ok(());
    }

    println!("{} ({})", res.status_label(), res.window_label(state));
    for item in &res.matches {
        let date = item.date.as_deref().unwrap_or("-");
        if item.tags.is_empty() {
            println!("{}  {}", item.key, date);
        } else {
            println!("{}  {}  [{}]", item.key, date, item.tags.join(", "));
        }
    }
    Ok(())
}

fn write_out(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    println!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
