//! Toast queue state.
//!
//! # Design
//! - Entries stack in arrival order; ids are monotonic and never reused.
//! - Each entry is visible for its timeout, then fades for [`FADE_MS`], then is removed.
//! - Timers live in the view; this module only records the phase transitions.

use crate::core::tone::ToastTone;

/// Visible time when the caller does not pick one.
pub const DEFAULT_TIMEOUT_MS: u32 = 3_000;
/// Length of the fade-out before removal.
pub const FADE_MS: u32 = 400;

/// Lifecycle phase of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Fully shown.
    Visible,
    /// Fading out; removed once the fade ends.
    Fading,
}

/// A queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastEntry {
    /// Monotonic identifier.
    pub id: u64,
    /// Text shown to the user.
    pub message: String,
    /// Color and icon.
    pub tone: ToastTone,
    /// Visible time before fading.
    pub timeout_ms: u32,
    /// Current phase.
    pub phase: ToastPhase,
}

/// A message to surface as a toast with the default timeout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Color and icon.
    pub tone: ToastTone,
    /// Text shown to the user.
    pub message: String,
}

impl Notice {
    /// Notice with an explicit tone.
    #[must_use]
    pub fn new(tone: ToastTone, message: impl Into<String>) -> Self {
        Self {
            tone,
            message: message.into(),
        }
    }
}

/// Stack of active toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    entries: Vec<ToastEntry>,
    last_id: u64,
}

impl ToastQueue {
    /// Queue a toast and return its id.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        tone: ToastTone,
        timeout_ms: Option<u32>,
    ) -> u64 {
        self.last_id += 1;
        self.entries.push(ToastEntry {
            id: self.last_id,
            message: message.into(),
            tone,
            timeout_ms: timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
            phase: ToastPhase::Visible,
        });
        self.last_id
    }

    /// Queue a [`Notice`] with the default timeout.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.show(notice.message, notice.tone, None)
    }

    /// Move a visible toast into its fade. Returns whether anything changed.
    pub fn begin_fade(&mut self, id: u64) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id && entry.phase == ToastPhase::Visible)
        {
            Some(entry) => {
                entry.phase = ToastPhase::Fading;
                true
            }
            None => false,
        }
    }

    /// Drop a toast. Returns whether it existed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Active toasts, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_stack_with_default_timeout() {
        let mut queue = ToastQueue::default();
        let first = queue.show("Saved", ToastTone::Success, None);
        let second = queue.show("Exported", ToastTone::Info, Some(1_000));
        assert!(second > first);
        assert_eq!(queue.entries().len(), 2);
        assert_eq!(queue.entries()[0].timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(queue.entries()[1].timeout_ms, 1_000);
    }

    #[test]
    fn notices_use_default_timeout() {
        let mut queue = ToastQueue::default();
        queue.push(Notice::new(ToastTone::Warning, "Name is required"));
        let entry = &queue.entries()[0];
        assert_eq!(entry.tone, ToastTone::Warning);
        assert_eq!(entry.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn fade_then_remove() {
        let mut queue = ToastQueue::default();
        let id = queue.show("Bye", ToastTone::Default, None);
        assert!(queue.begin_fade(id));
        assert!(!queue.begin_fade(id));
        assert_eq!(queue.entries()[0].phase, ToastPhase::Fading);
        assert!(queue.remove(id));
        assert!(!queue.remove(id));
        assert!(queue.entries().is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut queue = ToastQueue::default();
        let id = queue.show("a", ToastTone::Default, None);
        queue.remove(id);
        assert_eq!(queue.show("b", ToastTone::Default, None), id + 1);
    }
}
