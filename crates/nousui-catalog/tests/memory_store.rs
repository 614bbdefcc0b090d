//! Behavioural tests for the in-process component store.

use anyhow::Result;
use nousui_catalog::{ComponentId, ComponentStatus, ComponentStore, MemoryStore, StoreError};
use nousui_test_support::fixtures::{new_component, sample_catalog, seeded_store};
use nousui_test_support::logging::init_tracing;
use std::collections::HashSet;

#[tokio::test]
async fn inserted_records_are_listed_once_with_unique_ids() -> Result<()> {
    init_tracing();
    let store = seeded_store(&sample_catalog()).await?;
    let rows = store.list_all().await?;
    assert_eq!(rows.len(), 4);
    let ids: HashSet<_> = rows.iter().map(|row| row.id).collect();
    assert_eq!(ids.len(), 4);
    assert!(ids.contains(&ComponentId::new(1)));
    Ok(())
}

#[tokio::test]
async fn schema_is_created_once_across_operations() -> Result<()> {
    let store = MemoryStore::new();
    store.open().await?;
    store.open().await?;
    store.insert(&new_component("Alert", "feedback", "draft", 0)).await?;
    store.list_all().await?;
    assert_eq!(store.schema_runs(), 1);
    assert_eq!(store.index_names(), ["status", "createdAt"]);
    Ok(())
}

#[tokio::test]
async fn failed_schema_upgrade_fails_open_and_is_retried() -> Result<()> {
    init_tracing();
    let store = MemoryStore::new();
    store.fail_schema(Some("ConstraintError: index already exists"));

    let err = store.open().await.unwrap_err();
    assert!(matches!(err, StoreError::Open { ref detail } if detail.contains("ConstraintError")));
    assert!(matches!(store.list_all().await, Err(StoreError::Open { .. })));
    assert_eq!(store.schema_runs(), 0);

    store.fail_schema(None);
    store.open().await?;
    store.insert(&new_component("Alert", "feedback", "draft", 0)).await?;
    assert_eq!(store.schema_runs(), 1);
    assert_eq!(store.list_all().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn update_replaces_and_upserts() -> Result<()> {
    let store = seeded_store(&[new_component("Tabs", "navigation", "draft", 0)]).await?;
    let row = store.list_all().await?.remove(0);
    store.update(&row.promoted()).await?;
    let rows = store.list_all().await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, ComponentStatus::Testing);

    let orphan = new_component("Stepper", "navigation", "ready", 5).with_id(ComponentId::new(40));
    store.update(&orphan).await?;
    assert_eq!(store.len(), 2);
    let next = store.insert(&new_component("Menu", "navigation", "draft", 6)).await?;
    assert_eq!(next, ComponentId::new(41));
    Ok(())
}

#[tokio::test]
async fn deleting_a_missing_id_succeeds() -> Result<()> {
    let store = seeded_store(&sample_catalog()).await?;
    store.delete(ComponentId::new(999)).await?;
    assert_eq!(store.len(), 4);
    Ok(())
}

#[tokio::test]
async fn clear_empties_the_store_without_reusing_ids() -> Result<()> {
    let store = seeded_store(&sample_catalog()).await?;
    store.clear().await?;
    assert!(store.list_all().await?.is_empty());
    let id = store.insert(&new_component("Toast", "feedback", "draft", 0)).await?;
    assert_eq!(id, ComponentId::new(5));
    Ok(())
}

#[tokio::test]
async fn rejected_writes_surface_request_errors() -> Result<()> {
    let store = seeded_store(&sample_catalog()).await?;
    store.reject_writes(Some("QuotaExceededError"));
    let err = store
        .insert(&new_component("Big", "data", "draft", 0))
        .await
        .expect_err("write should be rejected");
    assert!(matches!(err, StoreError::Request { operation: "insert", .. }));
    assert_eq!(store.len(), 4);

    store.reject_writes(None);
    store.clear().await?;
    assert!(store.is_empty());
    Ok(())
}

#[tokio::test]
async fn create_promote_delete_scenario() -> Result<()> {
    let store = MemoryStore::new();
    let id = store.insert(&new_component("Header", "layout", "draft", 0)).await?;
    let rows = store.list_all().await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Header");
    assert_eq!(rows[0].kind, "layout");

    store.update(&rows[0].promoted()).await?;
    assert_eq!(store.list_all().await?[0].status, ComponentStatus::Testing);

    store.delete(id).await?;
    assert!(store.list_all().await?.is_empty());
    Ok(())
}
