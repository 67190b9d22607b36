//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// No data matched the request
    #[error("Not found: {0}")]
    NotFound(String),

    /// The underlying store failed or is unreachable
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = ApplicationError::NotFound("no observations".to_string());
        assert_eq!(err.to_string(), "Not found: no observations");
    }

    #[test]
    fn storage_message() {
        let err = ApplicationError::Storage("pool exhausted".to_string());
        assert_eq!(err.to_string(), "Storage error: pool exhausted");
    }

    #[test]
    fn configuration_message() {
        let err = ApplicationError::Configuration("bad port".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad port");
    }

    #[test]
    fn internal_message() {
        let err = ApplicationError::Internal("join error".to_string());
        assert_eq!(err.to_string(), "Internal error: join error");
    }
}
