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
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]

//! Component catalog records and the browser-local persistence layer.
//!
//! Layout: `model.rs` (records and the status cycle), `schema.rs` (database
//! identity and version-gated upgrade plan), `store.rs` (`ComponentStore`
//! contract), `memory.rs` (in-process backend), `idb.rs` (`IndexedDB` backend,
//! wasm32 only).

pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod idb;
pub mod memory;
pub mod model;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
#[cfg(target_arch = "wasm32")]
pub use idb::IndexedDbStore;
pub use memory::MemoryStore;
pub use model::{ComponentId, ComponentRecord, ComponentStatus, CreatedAt, NewComponent};
pub use store::ComponentStore;
