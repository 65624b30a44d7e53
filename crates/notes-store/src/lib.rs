//! notes-store: Storage layer for the notes API.
//!
//! This crate provides:
//! - The [`Store`] handle wrapping a PostgreSQL connection pool
//! - Row and input models for notes and users
//! - The closed [`StoreError`] enumeration consumed by the HTTP layer
//!
//! The store owns id casting and input validation: repository operations
//! take the raw string id from the request path and reject anything that
//! is not a syntactically valid identifier, and inserts/updates reject
//! missing or empty required fields before any statement is executed.

pub mod error;
pub mod models;

mod notes;
mod users;

pub use error::{StoreError, StoreResult};
pub use models::{NewNote, NewUser, NoteRow, UserRow};

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

/// Table definitions, embedded at compile time.
const SCHEMA_SQL: &str = include_str!("../schema.sql");

/// Shared handle to the backing database.
///
/// Cloning is cheap; all clones share one process-wide pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Connect to the database at the given URL.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        tracing::info!("connected to database");
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the embedded schema. Safe to run on every startup.
    pub async fn apply_schema(&self) -> StoreResult<()> {
        sqlx::raw_sql(SCHEMA_SQL).execute(&self.pool).await?;
        tracing::debug!("schema applied");
        Ok(())
    }
}

/// Cast a raw request id into a store identifier.
pub(crate) fn parse_id(raw: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| StoreError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_valid() {
        let id = parse_id("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_parse_id_truncated() {
        // One character short of a valid hex identifier
        let err = parse_id("5a3d5da59070081a82a3445").unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(_)));
    }

    #[test]
    fn test_parse_id_garbage() {
        let err = parse_id("not-an-id").unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(_)));
    }

    #[test]
    fn test_schema_sql_embedded() {
        assert!(SCHEMA_SQL.contains("CREATE TABLE IF NOT EXISTS notes"));
        assert!(SCHEMA_SQL.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(SCHEMA_SQL.contains("UNIQUE INDEX"));
    }
}
