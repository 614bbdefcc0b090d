//! Theme persistence against the in-memory backend.

use anyhow::Result;
use nousui_config::keys::THEME_KEY;
use nousui_config::{ConfigError, MemoryStorage, ThemeRole, ThemeStore, ThemeTokens};
use nousui_test_support::logging::init_tracing;

#[test]
fn missing_entry_loads_defaults() {
    let store = ThemeStore::new(MemoryStorage::new());
    assert_eq!(store.load(), ThemeTokens::default());
}

#[test]
fn saved_roles_load_back_and_others_default() -> Result<()> {
    let store = ThemeStore::new(MemoryStorage::new());
    let tokens = ThemeTokens::default()
        .with_role(ThemeRole::Accent, "#ff6600")
        .with_role(ThemeRole::Panel, "#101010");
    store.save(&tokens)?;

    let loaded = store.load();
    assert_eq!(loaded.accent, "#ff6600");
    assert_eq!(loaded.panel, "#101010");
    assert_eq!(loaded.muted, ThemeTokens::default().muted);
    Ok(())
}

#[test]
fn partial_override_keeps_unspecified_roles() {
    let storage = MemoryStorage::with_entry(THEME_KEY, r##"{"bg":"#000000"}"##);
    let loaded = ThemeStore::new(storage).load();
    assert_eq!(loaded.bg, "#000000");
    assert_eq!(loaded.accent, "#2a85ff");
    assert_eq!(loaded.border_strong, "#d9dde2");
}

#[test]
fn malformed_entry_falls_back_to_defaults() {
    init_tracing();
    let storage = MemoryStorage::with_entry(THEME_KEY, "{not json");
    assert_eq!(ThemeStore::new(storage).load(), ThemeTokens::default());
}

#[test]
fn mistyped_role_does_not_discard_valid_overrides() {
    init_tracing();
    let storage = MemoryStorage::with_entry(
        THEME_KEY,
        r##"{"accent":"#ff0000","bg":null,"panel":42,"borderStrong":"#222222"}"##,
    );
    let loaded = ThemeStore::new(storage).load();
    assert_eq!(loaded.accent, "#ff0000");
    assert_eq!(loaded.border_strong, "#222222");
    assert_eq!(loaded.bg, ThemeTokens::default().bg);
    assert_eq!(loaded.panel, ThemeTokens::default().panel);
}

#[test]
fn non_object_entry_falls_back_to_defaults() {
    let storage = MemoryStorage::with_entry(THEME_KEY, r##"["#ff0000"]"##);
    assert_eq!(ThemeStore::new(storage).load(), ThemeTokens::default());
}

#[test]
fn reset_removes_the_entry() -> Result<()> {
    let store = ThemeStore::new(MemoryStorage::new());
    store.save(&ThemeTokens::default().with_role(ThemeRole::Text, "#333333"))?;
    let tokens = store.reset()?;
    assert_eq!(tokens, ThemeTokens::default());
    assert!(store.storage().raw(THEME_KEY).is_none());
    Ok(())
}

#[test]
fn rejected_save_reports_storage_error() {
    let store = ThemeStore::new(MemoryStorage::new());
    store.storage().reject_writes(Some("QuotaExceededError"));
    let err = store
        .save(&ThemeTokens::default())
        .expect_err("write rejected");
    assert!(matches!(err, ConfigError::Storage { operation: "set", .. }));
    assert_eq!(store.load(), ThemeTokens::default());
}
