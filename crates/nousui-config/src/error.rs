//! Error types for preference persistence.

use thiserror::Error;

/// Result alias for preference operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Primary error type for preference persistence.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The runtime exposes no key-value storage.
    #[error("preference storage unavailable")]
    Unavailable,
    /// The storage backend rejected a read or write.
    #[error("preference storage `{operation}` failed for `{key}`: {detail}")]
    Storage {
        /// Operation identifier.
        operation: &'static str,
        /// Storage key involved.
        key: String,
        /// Message reported by the backend.
        detail: String,
    },
    /// A preference value could not be encoded.
    #[error("failed to encode preference `{key}`")]
    Encode {
        /// Storage key involved.
        key: &'static str,
        /// Underlying serialization error.
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Convenience constructor for backend failures.
    #[must_use]
    pub fn storage(operation: &'static str, key: &str, detail: impl Into<String>) -> Self {
        Self::Storage {
            operation,
            key: key.to_string(),
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn config_error_display_and_source() {
        let err = ConfigError::storage("set", "nous_dark", "QuotaExceededError");
        assert_eq!(
            err.to_string(),
            "preference storage `set` failed for `nous_dark`: QuotaExceededError"
        );
        assert!(err.source().is_none());

        let encode = ConfigError::Encode {
            key: "nousui-theme",
            source: serde_json::from_str::<bool>("nope").expect_err("invalid json"),
        };
        assert!(encode.source().is_some());
        assert_eq!(
            ConfigError::Unavailable.to_string(),
            "preference storage unavailable"
        );
    }
}
