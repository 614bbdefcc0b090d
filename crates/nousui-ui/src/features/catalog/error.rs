//! Errors raised by catalog controller operations.

use crate::core::toasts::Notice;
use crate::core::tone::ToastTone;
use nousui_catalog::StoreError;
use thiserror::Error;

/// Result alias for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Failures of a catalog operation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// User input was rejected before touching the store.
    #[error("{message}")]
    Validation {
        /// Message shown to the user.
        message: &'static str,
    },
    /// The local store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Rows could not be serialized for export.
    #[error("failed to serialize export")]
    Export {
        /// Underlying serialization error.
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Toast describing the failure: validation warns, everything else is an error.
    #[must_use]
    pub fn notice(&self) -> Notice {
        let tone = match self {
            Self::Validation { .. } => ToastTone::Warning,
            Self::Store(_) | Self::Export { .. } => ToastTone::Error,
        };
        Notice::new(tone, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_warns_and_storage_errors() {
        let validation = CatalogError::Validation {
            message: "Name is required",
        };
        assert_eq!(
            validation.notice(),
            Notice::new(ToastTone::Warning, "Name is required")
        );

        let store = CatalogError::from(StoreError::request("insert", "ConstraintError"));
        let notice = store.notice();
        assert_eq!(notice.tone, ToastTone::Error);
        assert_eq!(
            notice.message,
            "storage request `insert` failed: ConstraintError"
        );
    }
}
