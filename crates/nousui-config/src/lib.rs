#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Persisted UI preferences: theme tokens and the dark-mode flag.
//!
//! Layout: `keys.rs` (storage keys), `storage.rs` (`KeyValueStorage` contract
//! and backends), `theme.rs` (`ThemeTokens` + `ThemeStore`), `dark.rs`
//! (`DarkModePreference`).

pub mod dark;
pub mod error;
pub mod keys;
pub mod storage;
pub mod theme;

pub use dark::{BODY_CLASS, DarkModePreference};
pub use error::{ConfigError, ConfigResult};
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use theme::{ThemeRole, ThemeStore, ThemeTokens, css_variable_name};
