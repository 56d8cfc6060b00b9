//! Helpers for testing the transaction endpoints against the full router.

use std::{
    io::Write,
    sync::{Arc, Mutex},
};

use axum_test::TestServer;
use rusqlite::Connection;

use crate::{AppState, build_router};

/// Create a test server for the app router backed by an in-memory database.
///
/// The returned state shares its database connection with the server so
/// tests can set up and inspect data directly.
pub(crate) fn must_create_test_server() -> (TestServer, AppState) {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");
    let state = AppState::new(connection).expect("could not initialize test DB");
    let server =
        TestServer::new(build_router(state.clone())).expect("Could not create test server.");

    (server, state)
}

/// Remove the transaction table so that every query against it fails.
pub(crate) fn drop_transaction_table(state: &AppState) {
    state
        .db_connection
        .lock()
        .expect("could not acquire database lock")
        .execute("DROP TABLE \"transaction\"", ())
        .expect("could not drop transaction table");
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .expect("could not acquire log buffer lock")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` and return its result along with everything it logged.
pub(crate) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);

    let logs = String::from_utf8_lossy(&buffer.0.lock().expect("could not acquire log buffer lock"))
        .into_owned();

    (result, logs)
}
