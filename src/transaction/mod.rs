//! Transaction management for the bookkeeping service.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - Database functions for storing, querying, and managing transactions
//! - Route handlers for the JSON CRUD endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod get_endpoint;
mod list_endpoint;
mod state;

#[cfg(test)]
mod test_utils;

pub use self::core::{
    Transaction, TransactionBuilder, TransactionType, create_transaction,
    create_transaction_table,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;

#[cfg(test)]
pub use self::core::{
    count_transactions, delete_transaction, get_all_transactions, get_transaction,
    update_transaction,
};
