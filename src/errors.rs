//! Unified error type for the cart store.
//!
//! Cart operations themselves never fail; errors only come from the edges:
//! configuration, catalog parsing, and the storage backend.

use thiserror::Error;

/// Errors produced while configuring, loading, or persisting the cart store.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or was malformed
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable reason
        message: String,
    },

    /// The product catalog failed validation
    #[error("Invalid catalog: {message}")]
    InvalidCatalog {
        /// Which rule the catalog broke
        message: String,
    },

    /// Storage backend failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Snapshot could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::Config {
            message: "missing catalog".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: missing catalog");
    }

    #[test]
    fn test_serde_error_converts() {
        let parse_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
