//! `IndexedDB` backend for the component store.
//!
//! # Design
//! - The connection is opened lazily on first use and cached for the page lifetime.
//! - Schema creation happens inside `upgradeneeded` only, and only when the store is missing.
//!   A failed schema step aborts the upgrade, so the open fails and the next open retries it.
//! - Every request is bridged to a promise; writes also wait for the transaction to commit.
//! - Records cross the JS boundary as JSON text so field names stay identical to the serde model.

use crate::error::{StoreError, StoreResult};
use crate::model::{ComponentId, ComponentRecord, NewComponent};
use crate::schema::{self, DB_NAME, DB_VERSION, INDEXES, KEY_PATH, STORE_NAME, UpgradePlan};
use crate::store::ComponentStore;
use async_trait::async_trait;
use js_sys::{Function, JSON, Promise};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    IdbDatabase, IdbIndexParameters, IdbObjectStore, IdbObjectStoreParameters, IdbOpenDbRequest,
    IdbRequest, IdbTransaction, IdbTransactionMode,
};

/// Component store backed by the browser's `IndexedDB`.
#[derive(Debug, Default)]
pub struct IndexedDbStore {
    connection: RefCell<Option<IdbDatabase>>,
}

impl IndexedDbStore {
    /// Store handle; nothing is opened until the first operation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn database(&self) -> StoreResult<IdbDatabase> {
        if let Some(db) = self.connection.borrow().as_ref() {
            return Ok(db.clone());
        }
        let db = open_database().await?;
        *self.connection.borrow_mut() = Some(db.clone());
        Ok(db)
    }

    async fn object_store(
        &self,
        operation: &'static str,
        mode: IdbTransactionMode,
    ) -> StoreResult<(IdbTransaction, IdbObjectStore)> {
        let db = self.database().await?;
        let tx = db
            .transaction_with_str_and_mode(STORE_NAME, mode)
            .map_err(|err| StoreError::Transaction {
                operation,
                detail: describe(&err),
            })?;
        let store = tx
            .object_store(STORE_NAME)
            .map_err(|err| StoreError::Transaction {
                operation,
                detail: describe(&err),
            })?;
        Ok((tx, store))
    }

    async fn write(
        &self,
        operation: &'static str,
        issue: impl FnOnce(&IdbObjectStore) -> Result<IdbRequest, JsValue>,
    ) -> StoreResult<JsValue> {
        let (tx, store) = self
            .object_store(operation, IdbTransactionMode::Readwrite)
            .await?;
        let committed = transaction_settled(&tx);
        let request = issue(&store).map_err(|err| StoreError::request(operation, describe(&err)))?;
        let value = request_settled(&request)
            .await
            .map_err(|err| StoreError::request(operation, describe(&err)))?;
        committed
            .await
            .map_err(|err| StoreError::request(operation, describe(&err)))?;
        Ok(value)
    }
}

#[async_trait(?Send)]
impl ComponentStore for IndexedDbStore {
    async fn open(&self) -> StoreResult<()> {
        self.database().await.map(|_| ())
    }

    async fn list_all(&self) -> StoreResult<Vec<ComponentRecord>> {
        let (_tx, store) = self
            .object_store("list_all", IdbTransactionMode::Readonly)
            .await?;
        let request = store
            .get_all()
            .map_err(|err| StoreError::request("list_all", describe(&err)))?;
        let value = request_settled(&request)
            .await
            .map_err(|err| StoreError::request("list_all", describe(&err)))?;
        let rows: Vec<ComponentRecord> = from_js("list_all", &value)?;
        debug!(operation = "list_all", count = rows.len(), "listed components");
        Ok(rows)
    }

    async fn insert(&self, record: &NewComponent) -> StoreResult<ComponentId> {
        let payload = to_js("insert", record)?;
        let key = self.write("insert", |store| store.add(&payload)).await?;
        let id = key
            .as_f64()
            .and_then(ComponentId::from_key)
            .ok_or_else(|| StoreError::InvalidKey {
                detail: describe(&key),
            })?;
        debug!(operation = "insert", %id, "component stored");
        Ok(id)
    }

    async fn update(&self, record: &ComponentRecord) -> StoreResult<()> {
        let payload = to_js("update", record)?;
        self.write("update", |store| store.put(&payload)).await?;
        debug!(operation = "update", id = %record.id, status = %record.status, "component replaced");
        Ok(())
    }

    async fn delete(&self, id: ComponentId) -> StoreResult<()> {
        let key = JsValue::from(id.get());
        self.write("delete", |store| store.delete(&key)).await?;
        debug!(operation = "delete", %id, "component removed");
        Ok(())
    }

    async fn clear(&self) -> StoreResult<()> {
        self.write("clear", IdbObjectStore::clear).await?;
        debug!(operation = "clear", "store cleared");
        Ok(())
    }
}

async fn open_database() -> StoreResult<IdbDatabase> {
    let factory = web_sys::window()
        .ok_or(StoreError::Unavailable)?
        .indexed_db()
        .map_err(|err| StoreError::Open {
            detail: describe(&err),
        })?
        .ok_or(StoreError::Unavailable)?;
    let request = factory
        .open_with_u32(DB_NAME, DB_VERSION)
        .map_err(|err| StoreError::Open {
            detail: describe(&err),
        })?;

    let schema_failure: Rc<RefCell<Option<String>>> = Rc::default();
    let on_upgrade = {
        let request = request.clone();
        let schema_failure = Rc::clone(&schema_failure);
        Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = apply_schema(&request) {
                let detail = describe(&err);
                warn!(detail = %detail, "schema upgrade failed; aborting");
                if let Some(tx) = request.transaction()
                    && let Err(abort) = tx.abort()
                {
                    warn!(detail = %describe(&abort), "upgrade abort failed");
                }
                *schema_failure.borrow_mut() = Some(detail);
            }
        })
    };
    let on_blocked = Closure::<dyn FnMut()>::new(|| {
        warn!(database = DB_NAME, "database upgrade blocked by another connection");
    });
    request.set_onupgradeneeded(Some(on_upgrade.as_ref().unchecked_ref()));
    request.set_onblocked(Some(on_blocked.as_ref().unchecked_ref()));

    let opened = request_settled(&request).await;
    request.set_onupgradeneeded(None);
    request.set_onblocked(None);

    let db = opened
        .map_err(|err| StoreError::Open {
            detail: schema_failure
                .borrow_mut()
                .take()
                .unwrap_or_else(|| describe(&err)),
        })?
        .dyn_into::<IdbDatabase>()
        .map_err(|err| StoreError::Open {
            detail: describe(&err),
        })?;
    debug!(database = DB_NAME, version = DB_VERSION, "local database opened");
    Ok(db)
}

fn apply_schema(request: &IdbOpenDbRequest) -> Result<(), JsValue> {
    let db = request.result()?.dyn_into::<IdbDatabase>()?;
    let names = db.object_store_names();
    let existing: Vec<String> = (0..names.length()).filter_map(|i| names.item(i)).collect();
    if schema::plan_upgrade(existing.iter().map(String::as_str)) == UpgradePlan::UpToDate {
        return Ok(());
    }
    let params = IdbObjectStoreParameters::new();
    params.set_key_path(&JsValue::from_str(KEY_PATH));
    params.set_auto_increment(true);
    let store = db.create_object_store_with_optional_parameters(STORE_NAME, &params)?;
    for index in INDEXES {
        let options = IdbIndexParameters::new();
        options.set_unique(index.unique);
        store.create_index_with_str_and_optional_parameters(
            index.name,
            index.key_path,
            &options,
        )?;
    }
    debug!(store = STORE_NAME, indexes = INDEXES.len(), "schema created");
    Ok(())
}

fn request_settled(request: &IdbRequest) -> JsFuture {
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let on_success = {
            let request = request.clone();
            Closure::once_into_js(move || {
                let value = request.result().unwrap_or(JsValue::UNDEFINED);
                let _ = resolve.call1(&JsValue::NULL, &value);
            })
        };
        let on_error = {
            let request = request.clone();
            Closure::once_into_js(move || {
                let error = request
                    .error()
                    .ok()
                    .flatten()
                    .map_or(JsValue::UNDEFINED, JsValue::from);
                let _ = reject.call1(&JsValue::NULL, &error);
            })
        };
        request.set_onsuccess(Some(on_success.unchecked_ref()));
        request.set_onerror(Some(on_error.unchecked_ref()));
    });
    JsFuture::from(promise)
}

fn transaction_settled(tx: &IdbTransaction) -> JsFuture {
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let on_complete = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let on_abort = {
            let tx = tx.clone();
            Closure::once_into_js(move || {
                let error = tx
                    .error()
                    .map_or_else(|| JsValue::from_str("AbortError"), JsValue::from);
                let _ = reject.call1(&JsValue::NULL, &error);
            })
        };
        tx.set_oncomplete(Some(on_complete.unchecked_ref()));
        tx.set_onabort(Some(on_abort.unchecked_ref()));
    });
    JsFuture::from(promise)
}

fn to_js<T: Serialize>(operation: &'static str, value: &T) -> StoreResult<JsValue> {
    let text =
        serde_json::to_string(value).map_err(|source| StoreError::Codec { operation, source })?;
    JSON::parse(&text).map_err(|err| StoreError::request(operation, describe(&err)))
}

fn from_js<T: serde::de::DeserializeOwned>(
    operation: &'static str,
    value: &JsValue,
) -> StoreResult<T> {
    let text: String = JSON::stringify(value)
        .map_err(|err| StoreError::request(operation, describe(&err)))?
        .into();
    serde_json::from_str(&text).map_err(|source| StoreError::Codec { operation, source })
}

fn describe(value: &JsValue) -> String {
    if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", exception.name(), exception.message());
    }
    value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))
        .unwrap_or_else(|| format!("{value:?}"))
}
