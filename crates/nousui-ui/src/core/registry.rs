//! Widget registry: one definition per tag, registered at most once.
//!
//! # Design
//! - A tag maps to a scope class and a stylesheet generated under that scope.
//! - Registration is idempotent; a repeated tag is ignored and reported as `false`.
//! - DOM side effects (style injection) are the caller's job, driven by the return value.

use crate::core::styles;

/// Widgets shipped with the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetTag {
    /// Accent-striped content card.
    Card,
    /// Pill-shaped status label.
    Badge,
    /// Dialog with backdrop.
    Modal,
    /// Stacked transient notifications.
    Toast,
    /// Percentage bar.
    Progress,
    /// Hover hint.
    Tooltip,
}

impl WidgetTag {
    /// Every widget in registration order.
    pub const ALL: [Self; 6] = [
        Self::Card,
        Self::Badge,
        Self::Modal,
        Self::Toast,
        Self::Progress,
        Self::Tooltip,
    ];

    /// Registered tag name.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Card => "nous-card",
            Self::Badge => "nous-badge",
            Self::Modal => "nous-modal",
            Self::Toast => "nous-toast",
            Self::Progress => "nous-progress",
            Self::Tooltip => "nous-tooltip",
        }
    }

    /// Class carried by the widget root; every widget rule is nested under it.
    #[must_use]
    pub fn scope_class(self) -> String {
        format!("nous-scope-{}", self.tag())
    }
}

/// A registered widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetDefinition {
    /// Unique tag.
    pub tag: &'static str,
    /// Scope class on the widget root.
    pub scope_class: String,
    /// Stylesheet confined to `scope_class`.
    pub stylesheet: String,
}

impl WidgetDefinition {
    /// Definition of a built-in widget.
    #[must_use]
    pub fn builtin(widget: WidgetTag) -> Self {
        Self {
            tag: widget.tag(),
            scope_class: widget.scope_class(),
            stylesheet: styles::stylesheet(widget),
        }
    }
}

/// Set of registered widget definitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetRegistry {
    entries: Vec<WidgetDefinition>,
}

impl WidgetRegistry {
    /// Empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `definition`; returns `false` without changes when the tag is taken.
    pub fn register(&mut self, definition: WidgetDefinition) -> bool {
        if self.is_registered(definition.tag) {
            return false;
        }
        self.entries.push(definition);
        true
    }

    /// Register every built-in widget, returning the definitions that were new.
    pub fn register_builtins(&mut self) -> Vec<WidgetDefinition> {
        WidgetTag::ALL
            .into_iter()
            .map(WidgetDefinition::builtin)
            .filter(|definition| self.register(definition.clone()))
            .collect()
    }

    /// Whether `tag` is registered.
    #[must_use]
    pub fn is_registered(&self, tag: &str) -> bool {
        self.entries.iter().any(|entry| entry.tag == tag)
    }
}
