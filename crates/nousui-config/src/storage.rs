//! Key-value storage contract and its backends.
//!
//! # Design
//! - Values are plain strings; callers own the encoding.
//! - Methods take `&self` so handles can be shared by UI callbacks.

use crate::error::{ConfigError, ConfigResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// String key-value storage such as the browser's `localStorage`.
pub trait KeyValueStorage {
    /// Read a value; `None` when the key is absent.
    ///
    /// # Errors
    /// Returns an error when the backend cannot be read.
    fn get(&self, key: &str) -> ConfigResult<Option<String>>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    /// Returns an error when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> ConfigResult<()>;

    /// Remove a value; absent keys are not an error.
    ///
    /// # Errors
    /// Returns an error when the backend rejects the removal.
    fn remove(&self, key: &str) -> ConfigResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> ConfigResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> ConfigResult<()> {
        (**self).remove(key)
    }
}

/// In-process storage used by native tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
    rejection: RefCell<Option<String>>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Fail every subsequent write with `detail`, or accept writes again with `None`.
    pub fn reject_writes(&self, detail: Option<&str>) {
        *self.rejection.borrow_mut() = detail.map(str::to_string);
    }

    /// Raw stored value.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn check_write(&self, operation: &'static str, key: &str) -> ConfigResult<()> {
        match self.rejection.borrow().as_deref() {
            Some(detail) => Err(ConfigError::storage(operation, key, detail)),
            None => Ok(()),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> ConfigResult<()> {
        self.check_write("set", key)?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ConfigResult<()> {
        self.check_write("remove", key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The browser's `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn handle() -> ConfigResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(ConfigError::Unavailable)?
            .local_storage()
            .ok()
            .flatten()
            .ok_or(ConfigError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
fn describe(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        Self::handle()?
            .get_item(key)
            .map_err(|err| ConfigError::storage("get", key, describe(&err)))
    }

    fn set(&self, key: &str, value: &str) -> ConfigResult<()> {
        Self::handle()?
            .set_item(key, value)
            .map_err(|err| ConfigError::storage("set", key, describe(&err)))
    }

    fn remove(&self, key: &str) -> ConfigResult<()> {
        Self::handle()?
            .remove_item(key)
            .map_err(|err| ConfigError::storage("remove", key, describe(&err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_and_removes() -> ConfigResult<()> {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k")?, None);
        storage.set("k", "v")?;
        assert_eq!(storage.get("k")?.as_deref(), Some("v"));
        storage.remove("k")?;
        storage.remove("k")?;
        assert_eq!(storage.get("k")?, None);
        Ok(())
    }

    #[test]
    fn rejected_writes_leave_entries_untouched() {
        let storage = MemoryStorage::with_entry("k", "v");
        storage.reject_writes(Some("QuotaExceededError"));
        assert!(matches!(
            storage.set("k", "w"),
            Err(ConfigError::Storage {
                operation: "set",
                ..
            })
        ));
        assert!(storage.remove("k").is_err());
        assert_eq!(storage.raw("k").as_deref(), Some("v"));
    }
}
