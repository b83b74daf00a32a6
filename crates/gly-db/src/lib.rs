//! # gly-db
//!
//! libSQL database operations for Galley state management.
//!
//! Handles all relational state: clients, projects, file attachments, and
//! communications, plus the snapshot queries that feed the analytics core
//! and the batch operations (lifetime-value recompute, follow-up scan,
//! webhook intake).
//!
//! Uses the `libsql` crate (C `SQLite` fork) — provides native FTS5 and a
//! stable async API.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
pub mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Galley state operations.
///
/// Wraps a libSQL database and connection, and provides prefixed ID
/// generation. Repository methods live on [`service::GalleyService`].
pub struct GalleyDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl GalleyDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on first open.
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

        let galley_db = Self { db, conn };
        galley_db.run_migrations().await?;
        Ok(galley_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"cli-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Helper to create an in-memory database for testing.
    async fn test_db() -> GalleyDb {
        GalleyDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = ["clients", "projects", "project_files", "communications"];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn fts5_tables_exist() {
        let db = test_db().await;

        for table in &["clients_fts", "projects_fts"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "FTS5 table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("cli").await.unwrap();
        assert!(id.starts_with("cli-"), "ID should start with 'cli-': {id}");
        assert_eq!(
            id.len(),
            12,
            "ID should be 12 chars (3 prefix + 1 dash + 8 hex): {id}"
        );

        let hex_part = &id[4..];
        assert!(
            hex_part.chars().all(|c| c.is_ascii_hexdigit()),
            "Random part should be hex: {hex_part}"
        );
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in gly_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Run migrations again — should not fail
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn email_uniqueness_enforced() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO clients (id, first_name, last_name, email) VALUES ('cli-1', 'A', 'B', 'dup@u.edu')",
                (),
            )
            .await
            .unwrap();

        let result = db
            .conn()
            .execute(
                "INSERT INTO clients (id, first_name, last_name, email) VALUES ('cli-2', 'C', 'D', 'dup@u.edu')",
                (),
            )
            .await;
        assert!(result.is_err(), "duplicate email should be rejected");
    }

    #[tokio::test]
    async fn fts5_trigger_populates_on_insert() {
        let db = test_db().await;

        db.conn()
            .execute(
                "INSERT INTO clients (id, first_name, last_name, email, institution) VALUES ('cli-t1', 'Grace', 'Hopper', 'grace@yale.edu', 'Yale University')",
                (),
            )
            .await
            .unwrap();

        let mut rows = db
            .conn()
            .query(
                "SELECT rowid FROM clients_fts WHERE clients_fts MATCH 'hopper'",
                (),
            )
            .await
            .unwrap();
        assert!(
            rows.next().await.unwrap().is_some(),
            "FTS trigger should populate on INSERT"
        );
    }

    #[tokio::test]
    async fn cascade_deletes_projects_with_client() {
        let db = test_db().await;

        db.conn()
            .execute(
                "INSERT INTO clients (id, first_name, last_name, email) VALUES ('cli-c1', 'A', 'B', 'a@u.edu')",
                (),
            )
            .await
            .unwrap();
        db.conn()
            .execute(
                "INSERT INTO projects (id, client_id, title, project_type) VALUES ('prj-c1', 'cli-c1', 'T', 'quick_fix')",
                (),
            )
            .await
            .unwrap();

        db.conn()
            .execute("DELETE FROM clients WHERE id = 'cli-c1'", ())
            .await
            .unwrap();

        let mut rows = db
            .conn()
            .query("SELECT id FROM projects WHERE id = 'prj-c1'", ())
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_none());
    }
}
