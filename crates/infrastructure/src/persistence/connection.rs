//! Database connection management
//!
//! Provides read-only SQLite connection pooling via r2d2. The dataset is
//! produced by an external pipeline; this process never creates or
//! mutates it, so connections are opened with read-only flags and the
//! declared schema is validated once at startup.

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DatabaseConfig;

/// Database errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Database not found: {0}")]
    NotFound(String),

    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),
}

/// SQLite connection pool type alias
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Pooled connection type alias
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Open a read-only pool over an existing dataset and validate its schema
pub fn create_pool(config: &DatabaseConfig) -> Result<ConnectionPool, DatabaseError> {
    info!(path = %config.path, max_connections = config.max_connections, "Opening climate dataset");

    let manager = if config.path == ":memory:" {
        // In-memory databases are only reachable from tests; they start
        // empty, so schema validation below rejects them unless seeded
        // through the same connection.
        SqliteConnectionManager::memory()
    } else {
        if !Path::new(&config.path).exists() {
            return Err(DatabaseError::NotFound(config.path.clone()));
        }
        SqliteConnectionManager::file(&config.path).with_flags(
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
    };

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager)?;

    {
        let conn = pool.get()?;
        conn.execute_batch("PRAGMA busy_timeout = 5000;")?;
        super::schema::validate(&conn)?;
    }

    debug!("Database connection pool created successfully");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_fails_before_opening() {
        let config = DatabaseConfig {
            path: "/nonexistent/climate.sqlite".to_string(),
            max_connections: 1,
        };
        let err = create_pool(&config).unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound(_)));
        assert!(err.to_string().contains("/nonexistent/climate.sqlite"));
    }

    #[test]
    fn empty_memory_database_fails_schema_validation() {
        let config = DatabaseConfig {
            path: ":memory:".to_string(),
            max_connections: 1,
        };
        let err = create_pool(&config).unwrap_err();
        assert!(matches!(err, DatabaseError::SchemaMismatch(_)));
        assert!(err.to_string().contains("measurement"));
    }

    #[test]
    fn database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "hawaii.sqlite");
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn database_error_display() {
        let err = DatabaseError::NotFound("test.db".to_string());
        assert!(err.to_string().contains("test.db"));
    }
}
