#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Database access for traffic-stop records.
//!
//! Uses `switchy_database` for raw SQL execution against `PostgreSQL` (or a
//! local `SQLite` file). Each call to [`StopStore::query`] opens its own
//! connection and releases it before returning; there is no pooling.

pub mod db;
pub mod queries;
pub mod store;

use async_trait::async_trait;
use securecheck_database_models::Table;

pub use db::DatabaseConfig;
pub use store::DatabaseStore;

/// Errors that can occur during database operations.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The store could not be reached or rejected the credentials.
    #[error("Database connection error: {message}")]
    Connection {
        /// Description of what went wrong.
        message: String,
    },

    /// Database query error.
    #[error("Database error: {0}")]
    Database(#[from] switchy_database::DatabaseError),

    /// Invalid connection configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong.
        message: String,
    },
}

/// Executes SQL statements against the stop-record store.
#[async_trait]
pub trait StopStore: Send + Sync {
    /// Runs `sql` and materializes every returned row into a [`Table`].
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the connection cannot be opened or the
    /// statement fails.
    async fn query(&self, sql: &str) -> Result<Table, DbError>;
}
