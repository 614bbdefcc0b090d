//! Dark-mode preference persisted as a JSON boolean.

use crate::error::{ConfigError, ConfigResult};
use crate::keys::DARK_MODE_KEY;
use crate::storage::KeyValueStorage;
use tracing::warn;

/// Class toggled on the document body while dark mode is on.
pub const BODY_CLASS: &str = "dark";

/// Whether the dark palette is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DarkModePreference {
    enabled: bool,
}

impl DarkModePreference {
    /// Preference with an explicit value.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether dark mode is on.
    #[must_use]
    pub const fn enabled(self) -> bool {
        self.enabled
    }

    /// Read the stored flag; absent, unreadable or malformed values mean off.
    pub fn load(storage: &impl KeyValueStorage) -> Self {
        match storage.get(DARK_MODE_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).map_or_else(
                |err| {
                    warn!(error = %err, key = DARK_MODE_KEY, "malformed dark-mode flag");
                    Self::default()
                },
                Self::new,
            ),
            Ok(None) => Self::default(),
            Err(err) => {
                warn!(error = %err, "dark-mode flag unreadable");
                Self::default()
            }
        }
    }

    /// Persist the flag.
    ///
    /// # Errors
    /// Returns an error when the backend rejects the write.
    pub fn save(self, storage: &impl KeyValueStorage) -> ConfigResult<()> {
        let text = serde_json::to_string(&self.enabled).map_err(|source| ConfigError::Encode {
            key: DARK_MODE_KEY,
            source,
        })?;
        storage.set(DARK_MODE_KEY, &text)
    }

    /// Flip the flag and persist the new value.
    ///
    /// # Errors
    /// Returns an error when the backend rejects the write; the flag is not flipped then.
    pub fn toggle(self, storage: &impl KeyValueStorage) -> ConfigResult<Self> {
        let next = Self::new(!self.enabled);
        next.save(storage)?;
        Ok(next)
    }
}
