//! Catalog rows, filters and pure selectors for testing outside wasm.

use nousui_catalog::{ComponentRecord, ComponentStatus};

/// Status filter applied to the table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every status, including unknown ones.
    #[default]
    All,
    /// Only rows with exactly this status.
    Only(ComponentStatus),
}

impl StatusFilter {
    /// Values offered by the filter control.
    pub const OPTIONS: [&'static str; 5] = ["all", "draft", "testing", "ready", "deprecated"];

    /// Parse a control value; `all` means no filtering.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => Self::All,
            other => Self::Only(ComponentStatus::parse(other)),
        }
    }

    /// Control value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    /// Whether `status` passes the filter.
    #[must_use]
    pub fn matches(&self, status: &ComponentStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Headline counts over the full row set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Every row.
    pub total: usize,
    /// Rows in `ready`.
    pub ready: usize,
    /// Rows in `testing`.
    pub testing: usize,
    /// Rows in `draft`.
    pub draft: usize,
}

impl Counters {
    /// Count `rows`, ignoring any filter.
    #[must_use]
    pub fn from_rows(rows: &[ComponentRecord]) -> Self {
        rows.iter().fold(
            Self {
                total: rows.len(),
                ..Self::default()
            },
            |mut counters, row| {
                match row.status {
                    ComponentStatus::Ready => counters.ready += 1,
                    ComponentStatus::Testing => counters.testing += 1,
                    ComponentStatus::Draft => counters.draft += 1,
                    ComponentStatus::Deprecated | ComponentStatus::Unknown(_) => {}
                }
                counters
            },
        )
    }
}

/// Catalog slice of the app store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogState {
    rows: Vec<ComponentRecord>,
    /// Active status filter.
    pub filter: StatusFilter,
    /// Raw search box text.
    pub search: String,
    /// Whether the creation form is open.
    pub form_open: bool,
}

impl CatalogState {
    /// Cached rows, newest first once refreshed.
    #[must_use]
    pub fn rows(&self) -> &[ComponentRecord] {
        &self.rows
    }

    /// Replace the row cache wholesale.
    pub fn set_rows(&mut self, rows: Vec<ComponentRecord>) {
        self.rows = rows;
    }

    /// Rows passing the current filter and search.
    #[must_use]
    pub fn visible(&self) -> Vec<ComponentRecord> {
        select_visible(&self.rows, &self.filter, &self.search)
    }

    /// Counters over every cached row.
    #[must_use]
    pub fn counters(&self) -> Counters {
        Counters::from_rows(&self.rows)
    }
}

/// Order rows newest first by creation time.
pub fn sort_newest_first(rows: &mut [ComponentRecord]) {
    rows.sort_by(|left, right| right.created_at.cmp(&left.created_at));
}

/// Rows matching `filter` whose name contains the trimmed `search`, ignoring case.
#[must_use]
pub fn select_visible(
    rows: &[ComponentRecord],
    filter: &StatusFilter,
    search: &str,
) -> Vec<ComponentRecord> {
    let needle = search.trim().to_lowercase();
    rows.iter()
        .filter(|row| filter.matches(&row.status))
        .filter(|row| row.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nousui_catalog::CreatedAt;
    use nousui_test_support::fixtures::record;

    fn rows() -> Vec<ComponentRecord> {
        vec![
            record(1, "Card", "ready", 0),
            record(2, "Profile Card", "ready", 10),
            record(3, "Card Draft", "draft", 20),
            record(4, "Button", "testing", 30),
            record(5, "Legacy", "archived", 40),
        ]
    }

    #[test]
    fn all_filter_with_empty_search_keeps_every_row_in_order() {
        let rows = rows();
        assert_eq!(select_visible(&rows, &StatusFilter::All, "  "), rows);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = rows();
        for query in ["butt", "BUTTON", " Button "] {
            let found = select_visible(&rows, &StatusFilter::All, query);
            assert_eq!(found.len(), 1, "{query}");
            assert_eq!(found[0].name, "Button");
        }
    }

    #[test]
    fn ready_filter_with_search_narrows_but_counters_do_not() {
        let mut state = CatalogState::default();
        state.set_rows(rows());
        state.filter = StatusFilter::parse("ready");
        state.search = "card".into();
        let visible = state.visible();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|row| row.status == ComponentStatus::Ready));
        assert_eq!(
            state.counters(),
            Counters {
                total: 5,
                ready: 2,
                testing: 1,
                draft: 1,
            }
        );
        assert_eq!(state.rows().len(), 5);
    }

    #[test]
    fn sorting_puts_newest_first() {
        let mut rows = rows();
        sort_newest_first(&mut rows);
        let ids: Vec<u32> = rows.iter().map(|row| row.id.get()).collect();
        assert_eq!(ids, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn rows_without_a_readable_creation_time_sort_last() {
        let mut odd = record(6, "Imported", "draft", 0);
        odd.created_at = CreatedAt::Raw("01/05/2024 9:30".into());
        let mut rows = vec![odd, record(1, "Card", "ready", 0), record(2, "Tabs", "draft", 5)];
        sort_newest_first(&mut rows);
        let ids: Vec<u32> = rows.iter().map(|row| row.id.get()).collect();
        assert_eq!(ids, [2, 1, 6]);
    }

    #[test]
    fn filter_round_trips_control_values() {
        for value in StatusFilter::OPTIONS {
            assert_eq!(StatusFilter::parse(value).as_str(), value);
        }
        assert!(StatusFilter::All.matches(&ComponentStatus::parse("archived")));
    }
}
