use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    db::lock_connection,
    transaction::{core::get_all_transactions, state::TransactionState},
};

/// A route handler that responds with every transaction, latest first.
pub async fn list_transactions_endpoint(State(state): State<TransactionState>) -> Response {
    let transactions = lock_connection(&state.db_connection)
        .and_then(|connection| get_all_transactions(&connection))
        .inspect_err(|error| tracing::error!("Could not fetch transactions: {error}"));

    match transactions {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => error.into_json_response("Server error while fetching transactions"),
    }
}
