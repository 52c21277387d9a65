use std::time::Duration;

use rusqlite::Connection;
use tracing::log::info;

use crate::core::catalog::{CatalogError, CatalogResult};
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

// AUTOINCREMENT keeps ids monotonic so deleted ids are never handed out again.
const BOOKS_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL
);
";

// helper method to open a connection for the configured store
pub(crate) fn open_connection(config: &Configuration,
                              store: RepositoryStore) -> CatalogResult<Connection> {
    let conn = match store {
        RepositoryStore::Sqlite => {
            let conn = Connection::open(config.db_path.as_str())?;
            info!("opened books database at {}", config.db_path);
            conn
        }
        RepositoryStore::InMemorySqlite => Connection::open_in_memory()?,
    };
    conn.busy_timeout(Duration::from_secs(5))?;
    Ok(conn)
}

pub(crate) fn create_books_table(conn: &Connection) -> CatalogResult<()> {
    conn.execute_batch(BOOKS_SCHEMA)?;
    Ok(())
}

// init installs the log-to-tracing bridge (tracing-log feature), which the
// tracing::log macros used across the crate rely on to reach this subscriber.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .init();
}

impl From<rusqlite::Error> for CatalogError {
    fn from(err: rusqlite::Error) -> Self {
        CatalogError::storage(format!("{}", err).as_str())
    }
}
