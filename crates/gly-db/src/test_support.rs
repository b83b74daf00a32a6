//! Shared helpers for repo tests.

use crate::GalleyDb;
use crate::service::GalleyService;

/// An in-memory service for tests.
pub async fn test_service() -> GalleyService {
    let db = GalleyDb::open_local(":memory:").await.unwrap();
    GalleyService::from_db(db)
}
