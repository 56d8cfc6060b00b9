use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::macros::date;

use tally_rs::{Transaction, TransactionType, create_transaction, initialize_db};

/// A utility for creating a test database for the REST API server of tally_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test transactions...");

    let transactions = [
        Transaction::build(
            3200.0,
            date!(2025 - 01 - 31),
            "Salary - January 2025",
            "Salary",
            TransactionType::Income,
        ),
        Transaction::build(
            1450.0,
            date!(2025 - 02 - 01),
            "Rent",
            "Housing",
            TransactionType::Expense,
        ),
        Transaction::build(
            187.42,
            date!(2025 - 02 - 03),
            "Weekly shop",
            "Groceries",
            TransactionType::Expense,
        ),
        Transaction::build(
            4.8,
            date!(2025 - 02 - 04),
            "Flat white",
            "Eating out",
            TransactionType::Expense,
        ),
        Transaction::build(
            75.0,
            date!(2025 - 02 - 05),
            "Sold old bike",
            "Sales",
            TransactionType::Income,
        ),
    ];

    for transaction in transactions {
        create_transaction(transaction, &conn)?;
    }

    println!("Success!");

    Ok(())
}
