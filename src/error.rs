//! Defines the app level error type and its conversion to JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One or more of the required transaction fields was absent, null, empty
    /// or, in the case of the amount, zero.
    #[error("All fields are required")]
    MissingFields,

    /// The transaction type was not one of the accepted values.
    #[error("invalid transaction type \"{0}\", expected \"income\" or \"expense\"")]
    InvalidTransactionType(String),

    /// The date could not be parsed as either `YYYY-MM-DD` or an RFC 3339
    /// date-time.
    #[error("invalid date \"{0}\", expected a date such as \"2025-01-15\"")]
    InvalidDate(String),

    /// The request body could not be parsed as a transaction.
    ///
    /// Callers should pass in the rejection text from the JSON extractor.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the transaction has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("Transaction not found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// A human readable description of what went wrong.
    pub error: String,
}

/// Create a response with `status` and a JSON body `{"error": message}`.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_owned(),
        }),
    )
        .into_response()
}

impl Error {
    /// The HTTP status code the error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingFields
            | Error::InvalidTransactionType(_)
            | Error::InvalidDate(_)
            | Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error is a failure on the server side rather than a bad request.
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Convert the error into a JSON response, using `server_error_message`
    /// in place of the error text for internal server errors.
    ///
    /// The details of internal errors are never sent to the client, callers
    /// are expected to have logged them.
    pub(crate) fn into_json_response(self, server_error_message: &str) -> Response {
        let status = self.status_code();

        if self.is_server_error() {
            return error_response(status, server_error_message);
        }

        error_response(status, &self.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            tracing::error!("An unexpected error occurred: {self}");
        }

        self.into_json_response("Server error")
    }
}
