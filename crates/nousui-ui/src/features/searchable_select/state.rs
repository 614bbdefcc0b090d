//! Filter-as-you-type state machine for the searchable select.
//!
//! # Design
//! - The native `<select>` owns the committed value; this state only tracks the text box,
//!   the candidate list, the highlight and whether the panel is open.
//! - Keys act only while candidates exist; arrow keys wrap around.

/// Placeholder of the filter box when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "Filter options...";
/// Text shown when no candidate matches.
pub const NO_RESULTS: &str = "No results";

/// One entry mirrored from the native option list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Display text, trimmed.
    pub text: String,
    /// Submitted value.
    pub value: String,
}

impl SelectOption {
    /// Option with trimmed display text.
    #[must_use]
    pub fn new(text: &str, value: impl Into<String>) -> Self {
        Self {
            text: text.trim().to_string(),
            value: value.into(),
        }
    }
}

/// Keys the filter box reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectKey {
    /// Move the highlight down.
    Down,
    /// Move the highlight up.
    Up,
    /// Commit the highlighted candidate.
    Enter,
    /// Close the panel.
    Escape,
}

impl SelectKey {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Down),
            "ArrowUp" => Some(Self::Up),
            "Enter" => Some(Self::Enter),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Effect of a key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing happened; the browser default applies.
    Ignored,
    /// The highlight moved.
    Moved,
    /// A candidate was committed.
    Committed(SelectOption),
    /// The panel closed.
    Closed,
}

impl KeyOutcome {
    /// Whether the browser default must be suppressed.
    #[must_use]
    pub const fn prevents_default(&self) -> bool {
        matches!(self, Self::Moved | Self::Committed(_))
    }
}

/// Searchable select state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchableSelectState {
    items: Vec<SelectOption>,
    candidates: Vec<SelectOption>,
    query: String,
    highlighted: Option<usize>,
    open: bool,
    min_chars: usize,
}

impl SearchableSelectState {
    /// Closed state listing every item.
    #[must_use]
    pub fn new(items: Vec<SelectOption>, min_chars: usize) -> Self {
        Self {
            candidates: items.clone(),
            items,
            min_chars,
            ..Self::default()
        }
    }

    /// Replace the option list and re-run the current filter.
    pub fn set_items(&mut self, items: Vec<SelectOption>) {
        self.items = items;
        self.candidates = self.matching();
        self.highlighted = None;
    }

    /// Filter by `query`; resets the highlight and opens the panel.
    pub fn filter(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.candidates = self.matching();
        self.highlighted = None;
        self.open = true;
    }

    /// The filter box gained focus.
    pub const fn focus(&mut self) {
        self.open = true;
    }

    /// A click landed outside the widget root.
    pub const fn click_outside(&mut self) {
        self.open = false;
    }

    /// React to a key press.
    pub fn key(&mut self, key: SelectKey) -> KeyOutcome {
        let count = self.candidates.len();
        if count == 0 {
            return KeyOutcome::Ignored;
        }
        match key {
            SelectKey::Down => {
                self.highlighted = Some(self.highlighted.map_or(0, |index| (index + 1) % count));
                KeyOutcome::Moved
            }
            SelectKey::Up => {
                self.highlighted = Some(
                    self.highlighted
                        .map_or(count - 1, |index| (index + count - 1) % count),
                );
                KeyOutcome::Moved
            }
            SelectKey::Enter => self
                .highlighted
                .and_then(|index| self.commit(index))
                .map_or(KeyOutcome::Ignored, KeyOutcome::Committed),
            SelectKey::Escape => {
                self.open = false;
                KeyOutcome::Closed
            }
        }
    }

    /// Commit the candidate at `index`: the box shows its text and the panel closes.
    pub fn commit(&mut self, index: usize) -> Option<SelectOption> {
        let chosen = self.candidates.get(index)?.clone();
        self.query.clone_from(&chosen.text);
        self.open = false;
        Some(chosen)
    }

    /// Text box contents.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Candidates currently listed.
    #[must_use]
    pub fn candidates(&self) -> &[SelectOption] {
        &self.candidates
    }

    /// Highlighted candidate index.
    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether the panel is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    fn matching(&self) -> Vec<SelectOption> {
        let needle = self.query.trim().to_lowercase();
        if needle.chars().count() < self.min_chars {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|item| item.text.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits(min_chars: usize) -> SearchableSelectState {
        SearchableSelectState::new(
            vec![
                SelectOption::new(" Apple ", "apple"),
                SelectOption::new("Banana", "banana"),
                SelectOption::new("Cherry", "cherry"),
            ],
            min_chars,
        )
    }

    #[test]
    fn arrows_wrap_in_both_directions() {
        let mut state = fruits(0);
        assert_eq!(state.key(SelectKey::Down), KeyOutcome::Moved);
        assert_eq!(state.highlighted(), Some(0));
        state.key(SelectKey::Down);
        state.key(SelectKey::Down);
        state.key(SelectKey::Down);
        assert_eq!(state.highlighted(), Some(0));
        state.key(SelectKey::Up);
        assert_eq!(state.highlighted(), Some(2));

        let mut fresh = fruits(0);
        fresh.key(SelectKey::Up);
        assert_eq!(fresh.highlighted(), Some(2));
    }

    #[test]
    fn enter_commits_the_highlight() {
        let mut state = fruits(0);
        state.filter("an");
        assert_eq!(state.candidates().len(), 1);
        assert_eq!(state.key(SelectKey::Enter), KeyOutcome::Ignored);
        state.key(SelectKey::Down);
        let outcome = state.key(SelectKey::Enter);
        assert_eq!(
            outcome,
            KeyOutcome::Committed(SelectOption::new("Banana", "banana"))
        );
        assert!(outcome.prevents_default());
        assert_eq!(state.query(), "Banana");
        assert!(!state.is_open());
    }

    #[test]
    fn min_chars_gates_filtering() {
        let mut state = fruits(2);
        state.filter("c");
        assert_eq!(state.candidates().len(), 3);
        state.filter("ch");
        assert_eq!(state.candidates().len(), 1);
        assert_eq!(state.candidates()[0].text, "Cherry");
    }

    #[test]
    fn escape_and_outside_clicks_close() {
        let mut state = fruits(0);
        state.focus();
        assert!(state.is_open());
        assert_eq!(state.key(SelectKey::Escape), KeyOutcome::Closed);
        assert!(!state.is_open());
        state.filter("a");
        assert!(state.is_open());
        state.click_outside();
        assert!(!state.is_open());
    }

    #[test]
    fn filtering_resets_highlight_and_keys_need_candidates() {
        let mut state = fruits(0);
        state.key(SelectKey::Down);
        state.filter("zzz");
        assert_eq!(state.highlighted(), None);
        assert!(state.candidates().is_empty());
        assert_eq!(state.key(SelectKey::Down), KeyOutcome::Ignored);
        assert_eq!(state.key(SelectKey::Escape), KeyOutcome::Ignored);
    }

    #[test]
    fn new_items_rerun_the_filter() {
        let mut state = fruits(0);
        state.filter("berry");
        state.set_items(vec![SelectOption::new("Blueberry", "blueberry")]);
        assert_eq!(state.candidates().len(), 1);
        assert_eq!(SelectKey::from_key("ArrowUp"), Some(SelectKey::Up));
        assert_eq!(SelectKey::from_key("Tab"), None);
    }
}
