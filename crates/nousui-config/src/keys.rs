//! Local storage keys owned by the application.

/// JSON object of theme role overrides.
pub const THEME_KEY: &str = "nousui-theme";
/// JSON boolean dark-mode flag.
pub const DARK_MODE_KEY: &str = "nous_dark";
