//! Service layer hosting all repository methods.
//!
//! `GalleyService` wraps `GalleyDb` (raw database access). All repo methods
//! are implemented as `impl GalleyService` blocks in the `repos` modules.

use crate::GalleyDb;
use crate::error::DatabaseError;

/// Orchestrates database reads and mutations for the whole application.
pub struct GalleyService {
    db: GalleyDb,
}

impl GalleyService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = GalleyDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `GalleyDb` (for testing).
    #[must_use]
    pub const fn from_db(db: GalleyDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &GalleyDb {
        &self.db
    }
}
