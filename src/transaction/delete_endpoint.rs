use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::TransactionId,
    db::lock_connection,
    transaction::{core::delete_transaction, form::parse_transaction_id, state::TransactionState},
};

/// The JSON body sent to the client after a successful deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    /// A human readable description of what happened.
    pub message: String,
}

/// A route handler for deleting a transaction.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Response {
    match delete(&state, path) {
        Ok(()) => Json(MessageBody {
            message: "Transaction deleted successfully".to_owned(),
        })
        .into_response(),
        Err(error) => error.into_json_response("Server error while deleting transaction"),
    }
}

fn delete(
    state: &TransactionState,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<(), Error> {
    let transaction_id = parse_transaction_id(path)?;
    let connection = lock_connection(&state.db_connection)?;

    let rows_affected = delete_transaction(transaction_id, &connection).inspect_err(|error| {
        tracing::error!("Could not delete transaction {transaction_id}: {error}");
    })?;

    match rows_affected {
        0 => Err(Error::NotFound),
        _ => {
            tracing::debug!("Deleted transaction {transaction_id}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{FromRef, Path},
        http::StatusCode,
    };
    use time::macros::date;

    use crate::{
        Error,
        endpoints::{self, format_endpoint},
        error::ErrorBody,
        transaction::{
            Transaction, TransactionType, create_transaction, get_transaction,
            state::TransactionState,
            test_utils::{capture_logs, drop_transaction_table, must_create_test_server},
        },
    };

    use super::{MessageBody, delete};

    #[tokio::test]
    async fn deletes_transaction() {
        let (server, state) = must_create_test_server();
        let transaction = create_transaction(
            Transaction::build(
                1.23,
                date!(2025 - 10 - 26),
                "Test",
                "Misc",
                TransactionType::Expense,
            ),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION_API, transaction.id))
            .await;

        response.assert_status_ok();
        response.assert_json(&MessageBody {
            message: "Transaction deleted successfully".to_owned(),
        });
        assert_eq!(
            get_transaction(transaction.id, &state.db_connection.lock().unwrap()),
            Err(Error::NotFound)
        );
    }

    #[tokio::test]
    async fn deleting_twice_responds_not_found() {
        let (server, state) = must_create_test_server();
        let transaction = create_transaction(
            Transaction::build(
                1.23,
                date!(2025 - 10 - 26),
                "Test",
                "Misc",
                TransactionType::Expense,
            ),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();
        let endpoint = format_endpoint(endpoints::TRANSACTION_API, transaction.id);
        server.delete(&endpoint).await.assert_status_ok();

        let response = server.delete(&endpoint).await;

        response.assert_status_not_found();
        response.assert_json(&ErrorBody {
            error: "Transaction not found".to_owned(),
        });
    }

    #[tokio::test]
    async fn responds_with_server_error_on_database_failure() {
        let (server, state) = must_create_test_server();
        drop_transaction_table(&state);

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION_API, 1))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&ErrorBody {
            error: "Server error while deleting transaction".to_owned(),
        });
    }

    #[tokio::test]
    async fn responds_not_found_for_malformed_id() {
        let (server, _) = must_create_test_server();

        let response = server.delete("/api/transactions/not-an-id").await;

        response.assert_status_not_found();
        response.assert_json(&ErrorBody {
            error: "Transaction not found".to_owned(),
        });
    }

    #[tokio::test]
    async fn logs_transaction_id_on_database_failure() {
        let (_server, state) = must_create_test_server();
        drop_transaction_table(&state);

        let (result, logs) =
            capture_logs(|| delete(&TransactionState::from_ref(&state), Ok(Path(7))));

        assert!(matches!(result, Err(Error::SqlError(_))));
        assert!(
            logs.contains("Could not delete transaction 7"),
            "logs did not mention the transaction ID: {logs}"
        );
    }
}
