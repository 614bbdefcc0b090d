//! In-process component store.
//!
//! Mirrors the browser store's observable behavior: ids come from a key
//! generator that never reuses values (not even after `clear`), listing
//! returns records in key order, and the schema is applied once per store.
//! A failed schema step leaves the version untouched, so `open` fails and the
//! next call retries the upgrade.

use crate::error::{StoreError, StoreResult};
use crate::model::{ComponentId, ComponentRecord, NewComponent};
use crate::schema::{self, DB_VERSION, INDEXES, IndexSpec, STORE_NAME, UpgradePlan};
use crate::store::ComponentStore;
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::BTreeMap;
use tracing::debug;

/// Component store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RefCell<MemoryDatabase>,
}

#[derive(Debug, Default)]
struct MemoryDatabase {
    version: Option<u32>,
    stores: Vec<&'static str>,
    indexes: Vec<IndexSpec>,
    schema_runs: u32,
    records: BTreeMap<ComponentId, ComponentRecord>,
    last_key: u32,
    rejection: Option<String>,
    schema_failure: Option<String>,
}

impl MemoryDatabase {
    fn ensure_schema(&mut self) -> StoreResult<()> {
        if !schema::upgrade_needed(self.version) {
            return Ok(());
        }
        if let Some(detail) = &self.schema_failure {
            return Err(StoreError::Open {
                detail: detail.clone(),
            });
        }
        if schema::plan_upgrade(self.stores.iter().copied()) == UpgradePlan::CreateStore {
            self.stores.push(STORE_NAME);
            self.indexes.extend(INDEXES);
            self.schema_runs += 1;
        }
        self.version = Some(DB_VERSION);
        Ok(())
    }

    fn check_write(&self, operation: &'static str) -> StoreResult<()> {
        match &self.rejection {
            Some(detail) => Err(StoreError::request(operation, detail.clone())),
            None => Ok(()),
        }
    }

    fn next_key(&mut self, operation: &'static str) -> StoreResult<ComponentId> {
        let next = self.last_key.checked_add(1).ok_or_else(|| {
            StoreError::request(operation, "ConstraintError: key generator exhausted")
        })?;
        self.last_key = next;
        Ok(ComponentId::new(next))
    }
}

impl MemoryStore {
    /// Empty, unopened store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `detail`, or accept writes again with `None`.
    pub fn reject_writes(&self, detail: Option<&str>) {
        self.inner.borrow_mut().rejection = detail.map(str::to_string);
    }

    /// Make the next schema upgrade fail with `detail`, or let it succeed again with `None`.
    pub fn fail_schema(&self, detail: Option<&str>) {
        self.inner.borrow_mut().schema_failure = detail.map(str::to_string);
    }

    /// Number of times the object store and its indexes were created.
    #[must_use]
    pub fn schema_runs(&self) -> u32 {
        self.inner.borrow().schema_runs
    }

    /// Names of the secondary indexes currently defined.
    #[must_use]
    pub fn index_names(&self) -> Vec<&'static str> {
        self.inner
            .borrow()
            .indexes
            .iter()
            .map(|index| index.name)
            .collect()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait(?Send)]
impl ComponentStore for MemoryStore {
    async fn open(&self) -> StoreResult<()> {
        self.inner.borrow_mut().ensure_schema()
    }

    async fn list_all(&self) -> StoreResult<Vec<ComponentRecord>> {
        self.open().await?;
        let rows: Vec<_> = self.inner.borrow().records.values().cloned().collect();
        debug!(operation = "list_all", count = rows.len(), "listed components");
        Ok(rows)
    }

    async fn insert(&self, record: &NewComponent) -> StoreResult<ComponentId> {
        self.open().await?;
        let mut db = self.inner.borrow_mut();
        db.check_write("insert")?;
        let id = db.next_key("insert")?;
        db.records.insert(id, record.clone().with_id(id));
        debug!(operation = "insert", %id, "component stored");
        Ok(id)
    }

    async fn update(&self, record: &ComponentRecord) -> StoreResult<()> {
        self.open().await?;
        let mut db = self.inner.borrow_mut();
        db.check_write("update")?;
        let last_key = db.last_key.max(record.id.get());
        db.last_key = last_key;
        db.records.insert(record.id, record.clone());
        debug!(operation = "update", id = %record.id, status = %record.status, "component replaced");
        Ok(())
    }

    async fn delete(&self, id: ComponentId) -> StoreResult<()> {
        self.open().await?;
        let mut db = self.inner.borrow_mut();
        db.check_write("delete")?;
        let existed = db.records.remove(&id).is_some();
        debug!(operation = "delete", %id, existed, "component removed");
        Ok(())
    }

    async fn clear(&self) -> StoreResult<()> {
        self.open().await?;
        let mut db = self.inner.borrow_mut();
        db.check_write("clear")?;
        let removed = db.records.len();
        db.records.clear();
        debug!(operation = "clear", removed, "store cleared");
        Ok(())
    }
}
