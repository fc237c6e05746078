use std::collections::HashMap;

use super::*;

pub(super) async fn healthz() -> &'static str {
    "ok"
}

async fn search_response(state: &AppState, q: &str, params: &HashMap<String, String>) -> Response {
    state.pause().await;
    if q.trim().is_empty() {
        return bad_request("missing query");
    }
    let offset = query::int_param(params.get("offset").map(String::as_str), 0);
    let limit = query::int_param(
        params.get("limit").map(String::as_str),
        query::DEFAULT_LIMIT,
    );
    let items = state.items.read().await;
    Json(query::page(&items, q, offset, limit)).into_response()
}

pub(super) async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let q = params.get("q").cloned().unwrap_or_default();
    search_response(&state, &q, &params).await
}

pub(super) async fn search_field(
    State(state): State<Arc<AppState>>,
    Path(field): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    search_response(&state, &format!("{}:", field), &params).await
}

pub(super) async fn search_field_value(
    State(state): State<Arc<AppState>>,
    Path((field, value)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    search_response(&state, &format!("{}:{}", field, value), &params).await
}

pub(super) async fn data(State(state): State<Arc<AppState>>, Path(key): Path<String>) -> Response {
    state.pause().await;
    let items = state.items.read().await;
    match items.iter().find(|i| i.key == key) {
        Some(item) => Json(item.to_metadata()).into_response(),
        None => not_found(),
    }
}

#[derive(Clone, Copy, Debug)]
pub(super) enum Blob {
    Thumb,
    Preview,
    Original,
}

impl Blob {
    fn label(self) -> &'static str {
        match self {
            Blob::Thumb => "thumb",
            Blob::Preview => "preview",
            Blob::Original => "item",
        }
    }
}

async fn blob(state: &AppState, key: &str, kind: Blob) -> Response {
    state.pause().await;
    let items = state.items.read().await;
    if !items.iter().any(|i| i.key == key) {
        tracing::debug!(key, kind = kind.label(), "blob for unknown key");
        return not_found();
    }
    jpeg_bytes(format!("{}:{}", kind.label(), key).into_bytes())
}

pub(super) async fn thumb(State(state): State<Arc<AppState>>, Path(key): Path<String>) -> Response {
    blob(&state, &key, Blob::Thumb).await
}

pub(super) async fn preview(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Response {
    blob(&state, &key, Blob::Preview).await
}

pub(super) async fn item(State(state): State<Arc<AppState>>, Path(key): Path<String>) -> Response {
    blob(&state, &key, Blob::Original).await
}

pub(super) async fn run_command(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CommandRequest>,
) -> Response {
    state.pause().await;
    if state.fail_commands {
        return internal_error("command interpreter unavailable");
    }
    let mut items = state.items.write().await;
    let res = metadata_cmd::run(&mut items, &req);
    tracing::info!(cmd = %req.cmd, keys = req.key_count(), ok = res.result, "command");
    Json(res).into_response()
}
