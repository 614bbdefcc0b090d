//! Error types for the persistence layer.

use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised by component store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The runtime exposes no local database factory.
    #[error("local database unavailable")]
    Unavailable,
    /// Opening or upgrading the database failed.
    #[error("failed to open local database: {detail}")]
    Open {
        /// Message reported by the database engine.
        detail: String,
    },
    /// A transaction could not be created.
    #[error("failed to start `{operation}` transaction: {detail}")]
    Transaction {
        /// Operation identifier.
        operation: &'static str,
        /// Message reported by the database engine.
        detail: String,
    },
    /// The store rejected a request (constraint violation, quota, abort).
    #[error("storage request `{operation}` failed: {detail}")]
    Request {
        /// Operation identifier.
        operation: &'static str,
        /// Message reported by the database engine.
        detail: String,
    },
    /// A record could not be encoded or decoded.
    #[error("record codec failed during `{operation}`")]
    Codec {
        /// Operation identifier.
        operation: &'static str,
        /// Underlying serialization error.
        source: serde_json::Error,
    },
    /// The key generator produced a key that is not a valid component id.
    #[error("store returned an invalid key: {detail}")]
    InvalidKey {
        /// Textual rendering of the offending key.
        detail: String,
    },
}

impl StoreError {
    /// Convenience constructor for rejected requests.
    #[must_use]
    pub fn request(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::Request {
            operation,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn store_error_display_and_source() {
        let unavailable = StoreError::Unavailable;
        assert_eq!(unavailable.to_string(), "local database unavailable");
        assert!(unavailable.source().is_none());

        let request = StoreError::request("insert", "ConstraintError");
        assert_eq!(
            request.to_string(),
            "storage request `insert` failed: ConstraintError"
        );
        assert!(matches!(
            request,
            StoreError::Request {
                operation: "insert",
                ..
            }
        ));

        let codec = StoreError::Codec {
            operation: "list_all",
            source: serde_json::from_str::<u32>("nope").expect_err("invalid json"),
        };
        assert_eq!(codec.to_string(), "record codec failed during `list_all`");
        assert!(codec.source().is_some());
    }
}
