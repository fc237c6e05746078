//! In-memory development backend speaking the librarian HTTP API.
//!
//! Items are generated fixtures; commands understand only the scoped
//! `annex metadata` form. Used by the integration tests and for trying the
//! shell without a real library.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::sync::RwLock;

use librarian::model::{CommandRequest, CommandResult, METADATA_COMMAND_PREFIX, TAG_FIELD};

#[path = "librarian_devserver/types.rs"]
mod types;
use self::types::*;
#[path = "librarian_devserver/fixtures.rs"]
mod fixtures;
#[path = "librarian_devserver/query.rs"]
mod query;
#[path = "librarian_devserver/metadata_cmd.rs"]
mod metadata_cmd;
#[path = "librarian_devserver/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "librarian_devserver/handlers.rs"]
mod handlers;
#[path = "librarian_devserver/runtime.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
