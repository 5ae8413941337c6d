//! Persistence for the portfolio service.
//!
//! Records are stored as loosely-typed JSON documents behind the
//! [`DocumentStore`] trait. [`PgDocumentStore`] keeps them in PostgreSQL
//! JSONB; [`MemoryStore`] keeps them in process for tests. The typed
//! repositories in [`repositories`] are the only code that converts between
//! records and documents.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

mod document;
pub mod models;
pub mod repositories;
pub mod store;

pub use store::memory::MemoryStore;
pub use store::postgres::PgDocumentStore;
pub use store::{
    DeleteResult, Document, DocumentStore, FindOptions, InsertOneResult, Sort, StoredDocument,
    UpdateResult,
};

pub type DbPool = sqlx::PgPool;

/// The single store handle shared by every request for the process lifetime.
pub type SharedStore = Arc<dyn DocumentStore>;

/// Errors raised by any [`DocumentStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("document encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("duplicate key {id} in collection {collection}")]
    DuplicateKey { collection: String, id: uuid::Uuid },

    #[error("document {id} missing from collection {collection} after write")]
    MissingAfterWrite { collection: String, id: uuid::Uuid },
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), StoreError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use sqlx::migrate::MigrateError;

    use super::*;

    #[test]
    fn migration_failures_are_store_errors() {
        let err = StoreError::from(MigrateError::VersionMissing(20250101000000));

        assert_matches!(err, StoreError::Migrate(MigrateError::VersionMissing(20250101000000)));
        assert!(err.to_string().starts_with("migration error:"));
    }
}
