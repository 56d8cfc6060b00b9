//! The request body shared by the create and update endpoints, and its validation.

use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{TransactionBuilder, TransactionType},
};

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// The JSON body for creating or replacing a transaction.
///
/// Every field is optional at the deserialization stage so that a missing
/// field produces the same error as a null or empty one, see
/// [TransactionForm::validate].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    /// The amount of money, must be non-zero.
    pub amount: Option<f64>,
    /// Either `YYYY-MM-DD` or an RFC 3339 date-time.
    pub date: Option<String>,
    /// What the transaction was for.
    pub description: Option<String>,
    /// The category, e.g. "Groceries".
    pub category: Option<String>,
    /// Either "income" or "expense".
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
}

impl TransactionForm {
    /// Check that all fields are present and convert them into a builder.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::MissingFields] if any field is absent, null, empty or the amount is zero,
    /// - [Error::InvalidDate] if the date cannot be parsed,
    /// - or [Error::InvalidTransactionType] if the type is not "income" or "expense".
    pub fn validate(self) -> Result<TransactionBuilder, Error> {
        let (Some(amount), Some(date), Some(description), Some(category), Some(transaction_type)) = (
            self.amount.filter(|amount| *amount != 0.0),
            non_empty(self.date),
            non_empty(self.description),
            non_empty(self.category),
            non_empty(self.transaction_type),
        ) else {
            return Err(Error::MissingFields);
        };

        Ok(TransactionBuilder {
            amount,
            date: parse_date(&date)?,
            description,
            category,
            transaction_type: transaction_type.parse::<TransactionType>()?,
        })
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|text| !text.is_empty())
}

/// Parse a calendar date from either `YYYY-MM-DD` or an RFC 3339 date-time.
///
/// Only the date part of a date-time is kept, in the offset it was written in.
///
/// # Errors
/// Returns [Error::InvalidDate] if `text` is in neither format.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, DATE_FORMAT)
        .or_else(|_| OffsetDateTime::parse(text, &Rfc3339).map(|date_time| date_time.date()))
        .map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// Unwrap the JSON body of a request, converting extractor rejections into
/// [Error::InvalidBody].
pub(crate) fn parse_json_body(
    body: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<TransactionForm, Error> {
    match body {
        Ok(Json(form)) => Ok(form),
        Err(rejection) => {
            tracing::debug!("Rejected transaction body: {rejection}");
            Err(Error::InvalidBody(rejection.body_text()))
        }
    }
}

/// Unwrap the transaction ID in the request path.
///
/// An ID that is not an integer cannot refer to any transaction, so the
/// rejection is reported as [Error::NotFound].
pub(crate) fn parse_transaction_id(
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<TransactionId, Error> {
    match path {
        Ok(Path(transaction_id)) => Ok(transaction_id),
        Err(rejection) => {
            tracing::debug!("Rejected transaction ID: {rejection}");
            Err(Error::NotFound)
        }
    }
}
