use axum::{http::StatusCode, response::Response};

use crate::error::error_response;

/// The fallback handler for requests that do not match any route.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// A JSON 404 response for unknown routes.
pub fn get_404_not_found_response() -> Response {
    error_response(StatusCode::NOT_FOUND, "Route not found")
}
