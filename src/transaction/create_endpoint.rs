use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    db::lock_connection,
    transaction::{
        Transaction,
        core::create_transaction,
        form::{TransactionForm, parse_json_body},
        state::TransactionState,
    },
};

/// A route handler for creating a new transaction.
///
/// Responds with 201 Created and the stored transaction.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    body: Result<Json<TransactionForm>, JsonRejection>,
) -> Response {
    match create(&state, body) {
        Ok(transaction) => (StatusCode::CREATED, Json(transaction)).into_response(),
        Err(error) => error.into_json_response("Server error while creating transaction"),
    }
}

fn create(
    state: &TransactionState,
    body: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<Transaction, Error> {
    let builder = parse_json_body(body)?.validate()?;
    let connection = lock_connection(&state.db_connection)?;

    let transaction = create_transaction(builder, &connection)
        .inspect_err(|error| tracing::error!("Could not create transaction: {error}"))?;
    tracing::debug!("Created transaction {}", transaction.id);

    Ok(transaction)
}
