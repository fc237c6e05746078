use super::*;

pub(super) fn bad_request(msg: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": msg})),
    )
        .into_response()
}

pub(super) fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "not found"})),
    )
        .into_response()
}

pub(super) fn internal_error(msg: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": msg})),
    )
        .into_response()
}

pub(super) fn jpeg_bytes(bytes: Vec<u8>) -> Response {
    (
        [(header::CONTENT_TYPE, "image/jpeg")],
        axum::body::Bytes::from(bytes),
    )
        .into_response()
}
