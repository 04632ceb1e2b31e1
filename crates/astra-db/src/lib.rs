//! # astra-db
//!
//! libSQL storage for Astra: scientists, planets, and the missions that join
//! them. Opens a local database, applies the embedded schema, and exposes
//! repository methods on [`service::AstraService`].
//!
//! Uses the `libsql` crate (C `SQLite` fork) with foreign keys enabled on the
//! connection.

pub mod error;
pub mod helpers;
mod migrations;
pub mod naming;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use std::ops::Deref;

use error::DatabaseError;
use libsql::Builder;
use libsql::params::IntoParams;
use tokio::sync::{Mutex, MutexGuard};

/// Central database handle.
///
/// Holds one shared connection behind `gate`. Reads borrow it through
/// [`AstraDb::reader`] and writes go through [`AstraDb::insert`]; both hold
/// the gate, so a reader never observes a transaction that has not committed.
pub struct AstraDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    gate: Mutex<()>,
}

/// Shared connection borrowed for reading. Holds the gate until dropped, so
/// keep it alive while iterating rows.
pub struct Reader<'a> {
    _gate: MutexGuard<'a, ()>,
    conn: &'a libsql::Connection,
}

impl Deref for Reader<'_> {
    type Target = libsql::Connection;

    fn deref(&self) -> &Self::Target {
        self.conn
    }
}

impl AstraDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let astra_db = Self {
            db,
            conn,
            gate: Mutex::new(()),
        };
        astra_db.run_migrations().await?;
        tracing::debug!(path, "opened astra database");
        Ok(astra_db)
    }

    /// Borrow the connection for queries, waiting for any open write
    /// transaction to finish first.
    pub async fn reader(&self) -> Reader<'_> {
        Reader {
            _gate: self.gate.lock().await,
            conn: &self.conn,
        }
    }

    /// Insert a single row inside its own transaction and return its rowid.
    ///
    /// The transaction commits only if the statement succeeds; any error
    /// rolls it back, so a failed insert leaves nothing behind.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` for constraint violations (foreign key,
    /// CHECK, NOT NULL) or connection failures.
    pub async fn insert(
        &self,
        sql: &str,
        params: impl IntoParams + Send,
    ) -> Result<i64, DatabaseError> {
        let _gate = self.gate.lock().await;
        let tx = self.conn.transaction().await?;

        match tx.execute(sql, params).await {
            Ok(_) => {
                let id = tx.last_insert_rowid();
                tx.commit().await?;
                Ok(id)
            }
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::warn!(%rollback_error, "rollback after failed insert also failed");
                }
                Err(error.into())
            }
        }
    }
}
