use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    database_id::TransactionId,
    db::lock_connection,
    error::error_response,
    transaction::{
        Transaction,
        core::update_transaction,
        form::{TransactionForm, parse_json_body, parse_transaction_id},
        state::TransactionState,
    },
};

/// A route handler for replacing the fields of an existing transaction.
///
/// Responds with the transaction as it is after the update.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
    body: Result<Json<TransactionForm>, JsonRejection>,
) -> Response {
    match edit(&state, path, body) {
        Ok(transaction) => Json(transaction).into_response(),
        Err(Error::MissingFields) => error_response(
            StatusCode::BAD_REQUEST,
            "All fields are required for update",
        ),
        Err(error) => error.into_json_response("Server error while updating transaction"),
    }
}

fn edit(
    state: &TransactionState,
    path: Result<Path<TransactionId>, PathRejection>,
    body: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<Transaction, Error> {
    let builder = parse_json_body(body)?.validate()?;
    let transaction_id = parse_transaction_id(path)?;
    let connection = lock_connection(&state.db_connection)?;

    let transaction =
        update_transaction(transaction_id, builder, &connection).inspect_err(|error| {
            if error.is_server_error() {
                tracing::error!("Could not update transaction {transaction_id}: {error}");
            }
        })?;
    tracing::debug!("Updated transaction {transaction_id}");

    Ok(transaction)
}

#[cfg(test)]
mod tests {
    use axum::{
        Json,
        extract::{FromRef, Path},
        http::StatusCode,
    };
    use serde_json::json;
    use time::macros::date;

    use crate::{
        Error,
        endpoints::{self, format_endpoint},
        error::ErrorBody,
        transaction::{
            Transaction, TransactionType, create_transaction,
            form::TransactionForm,
            get_transaction,
            state::TransactionState,
            test_utils::{capture_logs, drop_transaction_table, must_create_test_server},
        },
    };

    use super::edit;

    fn update_body() -> serde_json::Value {
        json!({
            "amount": 18.0,
            "date": "2025-05-02",
            "description": "Cinema tickets",
            "category": "Entertainment",
            "type": "expense",
        })
    }

    #[tokio::test]
    async fn can_update_transaction() {
        let (server, state) = must_create_test_server();
        let original = create_transaction(
            Transaction::build(
                12.0,
                date!(2025 - 05 - 01),
                "Movie",
                "Fun",
                TransactionType::Income,
            ),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION_API, original.id))
            .json(&update_body())
            .await;

        response.assert_status_ok();
        let got = response.json::<Transaction>();
        assert_eq!(got.id, original.id);
        assert_eq!(got.amount, 18.0);
        assert_eq!(got.date, date!(2025 - 05 - 02));
        assert_eq!(got.description, "Cinema tickets");
        assert_eq!(got.category, "Entertainment");
        assert_eq!(got.transaction_type, TransactionType::Expense);
        assert_eq!(got.created_at, original.created_at);
        let stored = get_transaction(original.id, &state.db_connection.lock().unwrap())
            .expect("could not get updated transaction");
        assert_eq!(stored, got);
    }

    #[tokio::test]
    async fn responds_not_found_for_missing_transaction() {
        let (server, _) = must_create_test_server();

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION_API, 42))
            .json(&update_body())
            .await;

        response.assert_status_not_found();
        response.assert_json(&ErrorBody {
            error: "Transaction not found".to_owned(),
        });
    }

    #[tokio::test]
    async fn rejects_missing_fields() {
        let (server, state) = must_create_test_server();
        let original = create_transaction(
            Transaction::build(
                12.0,
                date!(2025 - 05 - 01),
                "Movie",
                "Fun",
                TransactionType::Expense,
            ),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION_API, original.id))
            .json(&json!({ "amount": 18.0 }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&ErrorBody {
            error: "All fields are required for update".to_owned(),
        });
        assert_eq!(
            get_transaction(original.id, &state.db_connection.lock().unwrap()),
            Ok(original)
        );
    }

    #[tokio::test]
    async fn responds_with_server_error_on_database_failure() {
        let (server, state) = must_create_test_server();
        drop_transaction_table(&state);

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION_API, 1))
            .json(&update_body())
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&ErrorBody {
            error: "Server error while updating transaction".to_owned(),
        });
    }

    #[tokio::test]
    async fn responds_not_found_for_malformed_id() {
        let (server, _) = must_create_test_server();

        let response = server
            .put("/api/transactions/not-an-id")
            .json(&update_body())
            .await;

        response.assert_status_not_found();
        response.assert_json(&ErrorBody {
            error: "Transaction not found".to_owned(),
        });
    }

    #[tokio::test]
    async fn validates_body_before_id() {
        let (server, _) = must_create_test_server();

        let response = server
            .put("/api/transactions/not-an-id")
            .json(&json!({ "description": "Cinema tickets" }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&ErrorBody {
            error: "All fields are required for update".to_owned(),
        });
    }

    #[tokio::test]
    async fn rejects_null_fields() {
        let (server, state) = must_create_test_server();
        let original = create_transaction(
            Transaction::build(
                12.0,
                date!(2025 - 05 - 01),
                "Movie",
                "Fun",
                TransactionType::Expense,
            ),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION_API, original.id))
            .json(&json!({
                "amount": 18.0,
                "date": "2025-05-02",
                "description": "Cinema tickets",
                "category": null,
                "type": "expense",
            }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&ErrorBody {
            error: "All fields are required for update".to_owned(),
        });
    }

    #[tokio::test]
    async fn logs_transaction_id_on_database_failure() {
        let (_server, state) = must_create_test_server();
        drop_transaction_table(&state);
        let form = TransactionForm {
            amount: Some(18.0),
            date: Some("2025-05-02".to_owned()),
            description: Some("Cinema tickets".to_owned()),
            category: Some("Entertainment".to_owned()),
            transaction_type: Some("expense".to_owned()),
        };

        let (result, logs) = capture_logs(|| {
            edit(
                &TransactionState::from_ref(&state),
                Ok(Path(7)),
                Ok(Json(form)),
            )
        });

        assert!(matches!(result, Err(Error::SqlError(_))));
        assert!(
            logs.contains("Could not update transaction 7"),
            "logs did not mention the transaction ID: {logs}"
        );
    }
}
