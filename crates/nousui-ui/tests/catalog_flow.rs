use anyhow::{Context, Result};
use nousui_catalog::{ComponentStatus, MemoryStore};
use nousui_test_support::fixtures::{base_time, sample_catalog, seeded_store};
use nousui_test_support::logging::init_tracing;
use nousui_ui::core::confirm::ConfirmService;
use nousui_ui::core::store::AppStore;
use nousui_ui::core::tone::ToastTone;
use nousui_ui::features::catalog::actions::{CatalogAction, perform, refresh};
use nousui_ui::features::catalog::logic::{ComponentDraft, export_rows};
use nousui_ui::features::catalog::state::StatusFilter;
use std::collections::BTreeSet;

#[tokio::test]
async fn filtered_view_keeps_counters_on_the_full_set() -> Result<()> {
    init_tracing();
    let store = seeded_store(&sample_catalog()).await?;
    let mut app = AppStore::default();
    app.apply_refresh(refresh(&store).await?, None);

    app.catalog.filter = StatusFilter::parse("ready");
    app.catalog.search = "  CARD ".to_string();

    let names: Vec<_> = app
        .catalog
        .visible()
        .into_iter()
        .map(|row| row.name)
        .collect();
    assert_eq!(names, ["Profile Card", "Card"]);

    let counters = app.catalog.counters();
    assert_eq!(counters.total, 4);
    assert_eq!(counters.ready, 2);
    assert_eq!(counters.testing, 1);
    assert_eq!(counters.draft, 1);
    Ok(())
}

#[tokio::test]
async fn create_promote_and_confirmed_delete() -> Result<()> {
    init_tracing();
    let store = MemoryStore::new();
    let confirm = ConfirmService::new();
    let mut app = AppStore::default();

    let draft = ComponentDraft {
        name: " Header ".into(),
        ..ComponentDraft::default()
    };
    let created = perform(&store, &confirm, CatalogAction::Create(draft), base_time())
        .await?
        .context("create needs no confirmation")?;
    app.apply_refresh(created.rows, Some(created.notice));
    let header = app.catalog.rows()[0].clone();
    assert_eq!(header.name, "Header");
    assert_eq!(header.status, ComponentStatus::Draft);

    let promoted = perform(&store, &confirm, CatalogAction::Promote(header), base_time())
        .await?
        .context("promote needs no confirmation")?;
    app.apply_refresh(promoted.rows, Some(promoted.notice));
    let header = app.catalog.rows()[0].clone();
    assert_eq!(header.status, ComponentStatus::Testing);

    let (deleted, _) = tokio::join!(
        perform(&store, &confirm, CatalogAction::Delete(header), base_time()),
        async { confirm.resolve(true) }
    );
    let deleted = deleted?.context("delete was confirmed")?;
    app.apply_refresh(deleted.rows, Some(deleted.notice));

    assert!(app.catalog.rows().is_empty());
    let tones: Vec<_> = app.toasts.entries().iter().map(|entry| entry.tone).collect();
    assert_eq!(
        tones,
        [ToastTone::Success, ToastTone::Success, ToastTone::Danger]
    );
    Ok(())
}

#[tokio::test]
async fn export_covers_every_cached_row() -> Result<()> {
    let store = seeded_store(&sample_catalog()).await?;
    let mut app = AppStore::default();
    app.apply_refresh(refresh(&store).await?, None);
    app.catalog.filter = StatusFilter::parse("draft");

    let file = export_rows(app.catalog.rows(), 1_700_000_000_000)?;
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&file.contents)?;
    let exported: BTreeSet<_> = parsed
        .iter()
        .filter_map(|row| row.get("id").and_then(serde_json::Value::as_u64))
        .collect();
    let cached: BTreeSet<_> = app
        .catalog
        .rows()
        .iter()
        .map(|row| u64::from(row.id.get()))
        .collect();
    assert_eq!(exported, cached);
    assert_eq!(file.filename, "nousui_components_1700000000000.json");
    Ok(())
}
