//! Catalog operations: store calls, confirmations and the toasts they produce.
//!
//! # Design
//! - Every mutation is followed by a full refresh; the row cache is never patched.
//! - Destructive actions wait on the confirmation slot; a "no" is not an error.
//! - Operations are generic over [`ComponentStore`] so they run natively against `MemoryStore`.

use crate::core::confirm::{ConfirmRequest, ConfirmService};
use crate::core::toasts::Notice;
use crate::core::tone::ToastTone;
use crate::features::catalog::error::CatalogResult;
use crate::features::catalog::logic::ComponentDraft;
use crate::features::catalog::state::sort_newest_first;
use chrono::{DateTime, Utc};
use nousui_catalog::{ComponentRecord, ComponentStore};

/// User-triggered catalog mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogAction {
    /// Insert a record from the creation form.
    Create(ComponentDraft),
    /// Advance a record one step through the status cycle.
    Promote(ComponentRecord),
    /// Remove a record after confirmation.
    Delete(ComponentRecord),
    /// Clear the whole store after confirmation.
    Reset,
}

impl CatalogAction {
    /// Question to confirm before running, if any.
    #[must_use]
    pub fn confirmation(&self) -> Option<ConfirmRequest> {
        match self {
            Self::Delete(record) => Some(ConfirmRequest {
                title: "Delete component".to_string(),
                message: format!("Delete \"{}\"?", record.name),
            }),
            Self::Reset => Some(ConfirmRequest {
                title: "Reset database".to_string(),
                message: "Clear the local component database?".to_string(),
            }),
            Self::Create(_) | Self::Promote(_) => None,
        }
    }

    /// Toast shown once the action completed.
    #[must_use]
    pub fn success_notice(&self) -> Notice {
        match self {
            Self::Create(_) => Notice::new(ToastTone::Success, "Component saved"),
            Self::Promote(_) => Notice::new(ToastTone::Success, "Status updated"),
            Self::Delete(_) => Notice::new(ToastTone::Danger, "Component deleted"),
            Self::Reset => Notice::new(ToastTone::Info, "Database reset"),
        }
    }
}

/// Outcome of a completed action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applied {
    /// Fresh rows, newest first.
    pub rows: Vec<ComponentRecord>,
    /// Toast to show.
    pub notice: Notice,
}

/// Every stored record, newest first.
///
/// # Errors
/// Returns an error when the store cannot be read.
pub async fn refresh<S>(store: &S) -> CatalogResult<Vec<ComponentRecord>>
where
    S: ComponentStore + ?Sized,
{
    let mut rows = store.list_all().await?;
    sort_newest_first(&mut rows);
    Ok(rows)
}

/// Run `action`, then refresh. `Ok(None)` means the user declined the confirmation.
///
/// # Errors
/// Returns a validation error before any store call, or the first store failure.
pub async fn perform<S>(
    store: &S,
    confirm: &ConfirmService,
    action: CatalogAction,
    now: DateTime<Utc>,
) -> CatalogResult<Option<Applied>>
where
    S: ComponentStore + ?Sized,
{
    if let Some(request) = action.confirmation()
        && !confirm.confirm(request.title, request.message).await
    {
        return Ok(None);
    }
    match &action {
        CatalogAction::Create(draft) => {
            let record = draft.to_new(now)?;
            store.insert(&record).await?;
        }
        CatalogAction::Promote(record) => store.update(&record.promoted()).await?,
        CatalogAction::Delete(record) => store.delete(record.id).await?,
        CatalogAction::Reset => store.clear().await?,
    }
    let rows = refresh(store).await?;
    Ok(Some(Applied {
        rows,
        notice: action.success_notice(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::error::CatalogError;
    use anyhow::{Result, anyhow};
    use nousui_catalog::{ComponentStatus, MemoryStore};
    use nousui_test_support::fixtures::{base_time, sample_catalog, seeded_store};

    fn header() -> ComponentDraft {
        ComponentDraft {
            name: "Header".into(),
            kind: "layout".into(),
            status: ComponentStatus::Draft,
            notes: String::new(),
        }
    }

    async fn answered(
        store: &MemoryStore,
        confirm: &ConfirmService,
        action: CatalogAction,
        accept: bool,
    ) -> CatalogResult<Option<Applied>> {
        let (outcome, _) = tokio::join!(perform(store, confirm, action, base_time()), async {
            confirm.resolve(accept)
        });
        outcome
    }

    #[tokio::test]
    async fn create_promote_delete_round_trip() -> Result<()> {
        let store = MemoryStore::new();
        let confirm = ConfirmService::new();

        let created = perform(&store, &confirm, CatalogAction::Create(header()), base_time())
            .await?
            .ok_or_else(|| anyhow!("create needs no confirmation"))?;
        assert_eq!(created.rows.len(), 1);
        assert_eq!(created.rows[0].created_at.instant(), Some(base_time()));
        assert_eq!(created.notice, Notice::new(ToastTone::Success, "Component saved"));

        let row = created.rows[0].clone();
        let promoted = perform(&store, &confirm, CatalogAction::Promote(row), base_time())
            .await?
            .ok_or_else(|| anyhow!("promote needs no confirmation"))?;
        assert_eq!(promoted.rows[0].status, ComponentStatus::Testing);

        let row = promoted.rows[0].clone();
        let deleted = answered(&store, &confirm, CatalogAction::Delete(row), true)
            .await?
            .ok_or_else(|| anyhow!("confirmed delete runs"))?;
        assert!(deleted.rows.is_empty());
        assert_eq!(deleted.notice.tone, ToastTone::Danger);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_store() -> Result<()> {
        let store = MemoryStore::new();
        store.reject_writes(Some("must not be called"));
        let draft = ComponentDraft {
            name: "  ".into(),
            ..header()
        };
        let err = perform(&store, &ConfirmService::new(), CatalogAction::Create(draft), base_time())
            .await
            .expect_err("validation fails");
        assert!(matches!(err, CatalogError::Validation { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn declined_delete_leaves_rows_alone() -> Result<()> {
        let store = seeded_store(&sample_catalog()).await?;
        let confirm = ConfirmService::new();
        let target = refresh(&store).await?.remove(0);
        let outcome = answered(&store, &confirm, CatalogAction::Delete(target), false).await?;
        assert!(outcome.is_none());
        assert_eq!(store.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn confirmed_reset_clears_everything() -> Result<()> {
        let store = seeded_store(&sample_catalog()).await?;
        let confirm = ConfirmService::new();
        let applied = answered(&store, &confirm, CatalogAction::Reset, true)
            .await?
            .ok_or_else(|| anyhow!("confirmed reset runs"))?;
        assert!(applied.rows.is_empty());
        assert_eq!(applied.notice, Notice::new(ToastTone::Info, "Database reset"));
        Ok(())
    }

    #[tokio::test]
    async fn store_failures_surface_as_errors() -> Result<()> {
        let store = seeded_store(&sample_catalog()).await?;
        store.reject_writes(Some("QuotaExceededError"));
        let err = perform(&store, &ConfirmService::new(), CatalogAction::Create(header()), base_time())
            .await
            .expect_err("store rejects");
        assert!(matches!(err, CatalogError::Store(_)));
        assert_eq!(err.notice().tone, ToastTone::Error);
        Ok(())
    }

    #[tokio::test]
    async fn refresh_orders_newest_first() -> Result<()> {
        let store = seeded_store(&sample_catalog()).await?;
        let names: Vec<String> = refresh(&store).await?.into_iter().map(|row| row.name).collect();
        assert_eq!(names, ["Header", "Login Form", "Profile Card", "Card"]);
        Ok(())
    }

    #[test]
    fn confirmations_carry_record_names() {
        let row = nousui_test_support::fixtures::record(1, "Header", "draft", 0);
        let request = CatalogAction::Delete(row).confirmation();
        assert_eq!(
            request.map(|request| (request.title, request.message)),
            Some((
                "Delete component".to_string(),
                "Delete \"Header\"?".to_string()
            ))
        );
        assert!(CatalogAction::Reset.confirmation().is_some());
        assert!(CatalogAction::Create(header()).confirmation().is_none());
    }
}
