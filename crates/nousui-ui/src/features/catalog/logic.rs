//! Pure helpers for the catalog view: form validation, presentation and export.

use crate::core::tone::BadgeTone;
use crate::features::catalog::error::{CatalogError, CatalogResult};
use chrono::{DateTime, Utc};
use nousui_catalog::{ComponentRecord, ComponentStatus, CreatedAt, NewComponent};

/// Type tags offered by the creation form.
pub const TYPE_OPTIONS: [&str; 6] = ["layout", "form", "feedback", "navigation", "data", "other"];

/// Message for a submission without a name.
pub const NAME_REQUIRED: &str = "Name is required";

/// Creation form contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentDraft {
    /// Name as typed.
    pub name: String,
    /// Selected type tag.
    pub kind: String,
    /// Initial status.
    pub status: ComponentStatus,
    /// Notes as typed.
    pub notes: String,
}

impl Default for ComponentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: TYPE_OPTIONS[0].to_string(),
            status: ComponentStatus::Draft,
            notes: String::new(),
        }
    }
}

impl ComponentDraft {
    /// Trim the text fields and stamp `created_at`.
    ///
    /// # Errors
    /// Returns [`CatalogError::Validation`] when the trimmed name is empty.
    pub fn to_new(&self, created_at: DateTime<Utc>) -> CatalogResult<NewComponent> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CatalogError::Validation {
                message: NAME_REQUIRED,
            });
        }
        Ok(NewComponent {
            name: name.to_string(),
            kind: self.kind.clone(),
            status: self.status.clone(),
            notes: self.notes.trim().to_string(),
            created_at,
        })
    }
}

/// Why the table has no rows to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyCatalog {
    /// Nothing has been stored yet.
    Fresh,
    /// Rows exist but the status filter or search hides all of them.
    Filtered,
}

impl EmptyCatalog {
    /// Classify an empty table; `None` while any row is visible.
    #[must_use]
    pub const fn classify(total: usize, visible: usize) -> Option<Self> {
        match (total, visible) {
            (_, 1..) => None,
            (0, 0) => Some(Self::Fresh),
            _ => Some(Self::Filtered),
        }
    }

    /// Decorative glyph shown above the headline.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Fresh => "\u{25a1}",
            Self::Filtered => "\u{2298}",
        }
    }

    /// Headline for the panel.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Fresh => "No components yet",
            Self::Filtered => "No matches",
        }
    }

    /// Follow-up hint under the headline.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Fresh => "Create the first entry to start the catalog.",
            Self::Filtered => "Adjust the status filter or the search text.",
        }
    }

    /// Whether the panel offers the creation button.
    #[must_use]
    pub const fn offers_create(self) -> bool {
        matches!(self, Self::Fresh)
    }
}

/// Badge tone for a status; unknown values are neutral.
#[must_use]
pub const fn status_tone(status: &ComponentStatus) -> BadgeTone {
    match status {
        ComponentStatus::Draft => BadgeTone::Warning,
        ComponentStatus::Testing => BadgeTone::Info,
        ComponentStatus::Ready => BadgeTone::Success,
        ComponentStatus::Deprecated => BadgeTone::Danger,
        ComponentStatus::Unknown(_) => BadgeTone::Neutral,
    }
}

/// Badge label for a status; unknown values show verbatim.
#[must_use]
pub fn status_label(status: &ComponentStatus) -> String {
    match status {
        ComponentStatus::Draft => "Draft".to_string(),
        ComponentStatus::Testing => "Testing".to_string(),
        ComponentStatus::Ready => "Ready".to_string(),
        ComponentStatus::Deprecated => "Deprecated".to_string(),
        ComponentStatus::Unknown(raw) => raw.clone(),
    }
}

/// `YYYY-MM-DD HH:MM` in UTC; values that never parsed are shown as stored.
#[must_use]
pub fn format_created(created_at: &CreatedAt) -> String {
    match created_at {
        CreatedAt::At(at) => at.format("%Y-%m-%d %H:%M").to_string(),
        CreatedAt::Raw(raw) => raw.clone(),
    }
}

/// Instant for a JavaScript-style epoch milliseconds reading.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn instant_from_millis(epoch_millis: f64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(epoch_millis as i64).unwrap_or(DateTime::UNIX_EPOCH)
}

/// A file ready to be offered for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested file name.
    pub filename: String,
    /// MIME type of `contents`.
    pub mime: &'static str,
    /// File body.
    pub contents: String,
}

/// Download name for an export taken at `epoch_millis`.
#[must_use]
pub fn export_filename(epoch_millis: i64) -> String {
    format!("nousui_components_{epoch_millis}.json")
}

/// Serialize every cached row as two-space indented JSON.
///
/// # Errors
/// Returns [`CatalogError::Export`] when serialization fails.
pub fn export_rows(rows: &[ComponentRecord], epoch_millis: i64) -> CatalogResult<ExportFile> {
    let contents =
        serde_json::to_string_pretty(rows).map_err(|source| CatalogError::Export { source })?;
    Ok(ExportFile {
        filename: export_filename(epoch_millis),
        mime: "application/json",
        contents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use nousui_test_support::fixtures::{base_time, record};
    use std::collections::BTreeSet;

    #[test]
    fn empty_table_is_classified_by_total_rows() {
        assert_eq!(EmptyCatalog::classify(0, 0), Some(EmptyCatalog::Fresh));
        assert_eq!(EmptyCatalog::classify(3, 0), Some(EmptyCatalog::Filtered));
        assert_eq!(EmptyCatalog::classify(3, 2), None);
        assert!(EmptyCatalog::Fresh.offers_create());
        assert!(!EmptyCatalog::Filtered.offers_create());
        assert_ne!(EmptyCatalog::Fresh.headline(), EmptyCatalog::Filtered.headline());
    }

    #[test]
    fn empty_name_is_rejected_before_anything_else() {
        let draft = ComponentDraft {
            name: "   ".into(),
            ..ComponentDraft::default()
        };
        assert!(matches!(
            draft.to_new(base_time()),
            Err(CatalogError::Validation {
                message: NAME_REQUIRED
            })
        ));
    }

    #[test]
    fn draft_fields_are_trimmed_and_stamped() {
        let draft = ComponentDraft {
            name: "  Header ".into(),
            notes: " sticky ".into(),
            ..ComponentDraft::default()
        };
        let new = draft.to_new(base_time()).expect("valid draft");
        assert_eq!(new.name, "Header");
        assert_eq!(new.notes, "sticky");
        assert_eq!(new.kind, "layout");
        assert_eq!(new.status, ComponentStatus::Draft);
        assert_eq!(new.created_at, base_time());
    }

    #[test]
    fn status_presentation_matches_tones() {
        assert_eq!(status_tone(&ComponentStatus::Draft), BadgeTone::Warning);
        assert_eq!(status_tone(&ComponentStatus::Ready), BadgeTone::Success);
        let odd = ComponentStatus::parse("archived");
        assert_eq!(status_tone(&odd), BadgeTone::Neutral);
        assert_eq!(status_label(&odd), "archived");
        assert_eq!(status_label(&ComponentStatus::Testing), "Testing");
    }

    #[test]
    fn created_dates_format_to_minutes() {
        let at = Utc
            .with_ymd_and_hms(2024, 5, 1, 9, 30, 59)
            .single()
            .expect("valid instant");
        assert_eq!(format_created(&CreatedAt::At(at)), "2024-05-01 09:30");
        assert_eq!(
            format_created(&CreatedAt::Raw("01/05/2024 9:30".into())),
            "01/05/2024 9:30"
        );
        assert_eq!(
            instant_from_millis(1_714_555_800_000.0),
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
                .single()
                .expect("valid instant")
        );
    }

    #[test]
    fn export_parses_back_to_the_same_ids() {
        let rows = vec![record(3, "Card", "ready", 0), record(9, "Tabs", "draft", 5)];
        let file = export_rows(&rows, 1_700_000_000_000).expect("export");
        assert_eq!(file.filename, "nousui_components_1700000000000.json");
        assert_eq!(file.mime, "application/json");
        assert!(file.contents.contains("\n  {"));
        let parsed: Vec<serde_json::Value> =
            serde_json::from_str(&file.contents).expect("valid json");
        let ids: BTreeSet<u64> = parsed
            .iter()
            .filter_map(|row| row["id"].as_u64())
            .collect();
        assert_eq!(ids, BTreeSet::from([3, 9]));
    }
}
