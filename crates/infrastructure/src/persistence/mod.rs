//! Persistence module
//!
//! Read-only SQLite access to the climate dataset: connection pooling,
//! startup schema validation, and the `ObservationStore` implementation.

pub mod connection;
pub mod observation_store;
pub mod schema;

pub use connection::{ConnectionPool, DatabaseError, PooledConn, create_pool};
pub use observation_store::SqliteObservationStore;
