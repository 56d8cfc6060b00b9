//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::error::error_response;

/// Bodies longer than this many characters are truncated in the `info` logs.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The largest body, in bytes, the middleware will buffer.
///
/// Matches the default limit of axum's body extractors.
pub const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] characters, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::warn!("Could not read request body: {error}");
            return error_response(StatusCode::PAYLOAD_TOO_LARGE, "Request body is too large");
        }
    };
    log_request(&parts, &String::from_utf8_lossy(&body_bytes));

    let response = next.run(Request::from_parts(parts, body_bytes.into())).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        }
    };
    log_response(&parts, &String::from_utf8_lossy(&body_bytes));

    Response::from_parts(parts, body_bytes.into())
}

async fn read_body(body: Body) -> Result<Bytes, axum::Error> {
    axum::body::to_bytes(body, MAX_BODY_SIZE).await
}

/// Cut `body` down to at most [LOG_BODY_LENGTH_LIMIT] characters.
///
/// Returns `None` if the body is short enough to log in full.
fn truncate(body: &str) -> Option<&str> {
    body.char_indices()
        .nth(LOG_BODY_LENGTH_LIMIT)
        .map(|(end, _)| &body[..end])
}

/// Format `body` for the `info` logs, quoted and truncated to
/// [LOG_BODY_LENGTH_LIMIT] characters.
fn loggable_body(body: &str) -> String {
    match truncate(body) {
        Some(truncated) => format!("{truncated:?}..."),
        None => format!("{body:?}"),
    }
}

fn log_request(parts: &axum::http::request::Parts, body: &str) {
    tracing::info!(
        "Received request: {} {}\nbody: {}",
        parts.method,
        parts.uri,
        loggable_body(body)
    );
    if truncate(body).is_some() {
        tracing::debug!("Full request body: {body:?}");
    }
    tracing::debug!("Request headers: {:#?}", parts.headers);
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    tracing::info!(
        "Sending response: {}\nbody: {}",
        parts.status,
        loggable_body(body)
    );
    if truncate(body).is_some() {
        tracing::debug!("Full response body: {body:?}");
    }
    tracing::debug!("Response headers: {:#?}", parts.headers);
}
