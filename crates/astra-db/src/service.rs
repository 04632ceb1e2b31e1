//! Service layer owning the database handle.
//!
//! `AstraService` wraps `AstraDb`. All repository methods are implemented as
//! `impl AstraService` blocks in [`crate::repos`].

use crate::AstraDb;
use crate::error::DatabaseError;

/// Entry point for every data-model operation.
///
/// Mutations follow one protocol:
/// 1. Validate the draft (done by `astra-core` before the call)
/// 2. Begin transaction
/// 3. Execute the INSERT
/// 4. Commit, or roll back on any error
pub struct AstraService {
    db: AstraDb,
}

impl AstraService {
    /// Create a new service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = AstraDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `AstraDb`.
    #[must_use]
    pub const fn from_db(db: AstraDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &AstraDb {
        &self.db
    }
}
