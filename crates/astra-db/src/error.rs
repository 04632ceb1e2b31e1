//! Database error types for astra-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Opening the database or applying the schema failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error, including constraint violations.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
