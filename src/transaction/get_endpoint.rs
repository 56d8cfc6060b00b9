use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    database_id::TransactionId,
    db::lock_connection,
    transaction::{
        Transaction, core::get_transaction, form::parse_transaction_id, state::TransactionState,
    },
};

/// A route handler that responds with a single transaction.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Response {
    match fetch(&state, path) {
        Ok(transaction) => Json(transaction).into_response(),
        Err(error) => error.into_json_response("Server error while fetching transaction"),
    }
}

fn fetch(
    state: &TransactionState,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Transaction, Error> {
    let transaction_id = parse_transaction_id(path)?;
    let connection = lock_connection(&state.db_connection)?;

    get_transaction(transaction_id, &connection).inspect_err(|error| {
        if error.is_server_error() {
            tracing::error!("Could not fetch transaction {transaction_id}: {error}");
        }
    })
}
