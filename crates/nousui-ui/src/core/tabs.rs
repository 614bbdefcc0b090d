//! Top-level tabs of the application shell.

/// Tab shown in the main area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AppTab {
    /// Component catalog table.
    #[default]
    Catalog,
    /// Widget gallery.
    Widgets,
    /// Theme editor.
    Theme,
}

impl AppTab {
    /// Tabs in display order.
    pub const ALL: [Self; 3] = [Self::Catalog, Self::Widgets, Self::Theme];

    /// Tab caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Catalog => "Catalog",
            Self::Widgets => "Widgets",
            Self::Theme => "Theme",
        }
    }

    /// Stable identifier used for element ids.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Widgets => "widgets",
            Self::Theme => "theme",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppTab;

    #[test]
    fn catalog_is_the_landing_tab() {
        assert_eq!(AppTab::default(), AppTab::Catalog);
        assert_eq!(AppTab::ALL.map(AppTab::label), ["Catalog", "Widgets", "Theme"]);
    }
}
