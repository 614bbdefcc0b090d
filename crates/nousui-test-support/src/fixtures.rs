//! Record builders and pre-seeded stores.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, TimeZone, Utc};
use nousui_catalog::{
    ComponentId, ComponentRecord, ComponentStatus, ComponentStore, MemoryStore, NewComponent,
};

/// Fixed reference instant so ordering assertions are deterministic.
#[must_use]
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// New record created `minutes` after [`base_time`].
#[must_use]
pub fn new_component(name: &str, kind: &str, status: &str, minutes: i64) -> NewComponent {
    NewComponent {
        name: name.to_string(),
        kind: kind.to_string(),
        status: ComponentStatus::parse(status),
        notes: String::new(),
        created_at: base_time() + Duration::minutes(minutes),
    }
}

/// Persisted record with an explicit id, created `minutes` after [`base_time`].
#[must_use]
pub fn record(id: u32, name: &str, status: &str, minutes: i64) -> ComponentRecord {
    new_component(name, "layout", status, minutes).with_id(ComponentId::new(id))
}

/// A small mixed catalog: two ready cards, a testing form, a draft layout.
#[must_use]
pub fn sample_catalog() -> Vec<NewComponent> {
    vec![
        new_component("Card", "layout", "ready", 0),
        new_component("Profile Card", "data", "ready", 10),
        new_component("Login Form", "form", "testing", 20),
        new_component("Header", "layout", "draft", 30),
    ]
}

/// Memory store pre-populated with `records`, inserted in order.
///
/// # Errors
/// Returns an error when any insert fails.
pub async fn seeded_store(records: &[NewComponent]) -> Result<MemoryStore> {
    let store = MemoryStore::new();
    for record in records {
        store
            .insert(record)
            .await
            .with_context(|| format!("failed to seed {}", record.name))?;
    }
    Ok(store)
}
