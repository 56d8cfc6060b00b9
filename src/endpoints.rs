//! The API endpoints URIs.
//!
//! Endpoints that take a parameter use axum's `{param}` path syntax.

/// The route to list and create transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to read, update and delete a single transaction.
pub const TRANSACTION_API: &str = "/api/transactions/{transaction_id}";
/// The route for checking whether the server is up.
pub const HEALTH: &str = "/api/health";

/// Replace the path parameter in `endpoint` with `id`.
///
/// Only the first `{...}` parameter is replaced.
#[cfg(test)]
pub fn format_endpoint(endpoint: &str, id: i64) -> String {
    match (endpoint.find('{'), endpoint.find('}')) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{id}{}", &endpoint[..start], &endpoint[end + 1..])
        }
        _ => endpoint.to_owned(),
    }
}
