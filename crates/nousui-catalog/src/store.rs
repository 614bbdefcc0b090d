//! Storage contract shared by every backend.
//!
//! # Design
//! - Each operation is one independent, atomic transaction.
//! - Operations are suspend points; callers sequence them with `.await`.
//! - Backends are single-threaded, so the trait does not require `Send`.

use crate::error::StoreResult;
use crate::model::{ComponentId, ComponentRecord, NewComponent};
use async_trait::async_trait;

/// Async CRUD surface over the component record store.
#[async_trait(?Send)]
pub trait ComponentStore {
    /// Establish the connection (idempotent) and apply the schema if needed.
    async fn open(&self) -> StoreResult<()>;

    /// Every stored record, in storage order.
    async fn list_all(&self) -> StoreResult<Vec<ComponentRecord>>;

    /// Persist a new record and return the generated id.
    async fn insert(&self, record: &NewComponent) -> StoreResult<ComponentId>;

    /// Replace the record with the same id, inserting it when absent.
    async fn update(&self, record: &ComponentRecord) -> StoreResult<()>;

    /// Remove a record; succeeds when the id does not exist.
    async fn delete(&self, id: ComponentId) -> StoreResult<()>;

    /// Remove every record.
    async fn clear(&self) -> StoreResult<()>;
}
