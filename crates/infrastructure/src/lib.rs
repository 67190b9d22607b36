//! Infrastructure layer for the climate observation API
//!
//! Configuration loading, the SQLite connection pool with startup schema
//! validation, the `ObservationStore` implementation, and the system
//! clock.

pub mod clock;
pub mod config;
pub mod persistence;

pub use clock::SystemClock;
pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use persistence::{ConnectionPool, DatabaseError, SqliteObservationStore, create_pool};
