//! Theme tokens and their persistence.
//!
//! # Design
//! - One owned [`ThemeTokens`] value; every role always has a color.
//! - Persisted overrides merge role by role over the defaults; missing or non-string roles keep their default.
//! - Only an explicit [`ThemeStore::save`] writes; [`ThemeStore::reset`] removes the entry.

use crate::error::{ConfigError, ConfigResult};
use crate::keys::THEME_KEY;
use crate::storage::KeyValueStorage;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// A themable color role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeRole {
    /// Accent color for primary actions and highlights.
    Accent,
    /// Page background.
    Bg,
    /// Body text.
    Text,
    /// Panel and card surfaces.
    Panel,
    /// Secondary text.
    Muted,
    /// Hairline borders.
    Border,
    /// Emphasized borders.
    BorderStrong,
}

impl ThemeRole {
    /// Every role in application order.
    pub const ALL: [Self; 7] = [
        Self::Accent,
        Self::Bg,
        Self::Text,
        Self::Panel,
        Self::Muted,
        Self::Border,
        Self::BorderStrong,
    ];

    /// Roles exposed by the theme editor.
    pub const EDITABLE: [Self; 4] = [Self::Accent, Self::Bg, Self::Text, Self::Panel];

    /// Persisted key of the role.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Accent => "accent",
            Self::Bg => "bg",
            Self::Text => "text",
            Self::Panel => "panel",
            Self::Muted => "muted",
            Self::Border => "border",
            Self::BorderStrong => "borderStrong",
        }
    }

    /// Human-readable label for editors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accent => "Accent",
            Self::Bg => "Background",
            Self::Text => "Text",
            Self::Panel => "Panel",
            Self::Muted => "Muted",
            Self::Border => "Border",
            Self::BorderStrong => "Strong border",
        }
    }

    /// CSS custom property carrying the role.
    #[must_use]
    pub fn css_variable(self) -> String {
        css_variable_name(self.key())
    }
}

/// `--` followed by the kebab-case form of a camelCase role key.
#[must_use]
pub fn css_variable_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + 4);
    name.push_str("--");
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            name.push('-');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}

/// Complete set of theme colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeTokens {
    /// Accent color.
    pub accent: String,
    /// Page background.
    pub bg: String,
    /// Body text.
    pub text: String,
    /// Panel surfaces.
    pub panel: String,
    /// Secondary text.
    pub muted: String,
    /// Hairline borders.
    pub border: String,
    /// Emphasized borders.
    pub border_strong: String,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            accent: "#2a85ff".to_string(),
            bg: "#f7f7f5".to_string(),
            text: "#1e1e1e".to_string(),
            panel: "#ffffff".to_string(),
            muted: "#6b7280".to_string(),
            border: "#e4e7eb".to_string(),
            border_strong: "#d9dde2".to_string(),
        }
    }
}

impl ThemeTokens {
    /// Color assigned to `role`.
    #[must_use]
    pub fn get(&self, role: ThemeRole) -> &str {
        match role {
            ThemeRole::Accent => &self.accent,
            ThemeRole::Bg => &self.bg,
            ThemeRole::Text => &self.text,
            ThemeRole::Panel => &self.panel,
            ThemeRole::Muted => &self.muted,
            ThemeRole::Border => &self.border,
            ThemeRole::BorderStrong => &self.border_strong,
        }
    }

    /// Copy with `role` set to `value`.
    #[must_use]
    pub fn with_role(mut self, role: ThemeRole, value: impl Into<String>) -> Self {
        let value = value.into();
        match role {
            ThemeRole::Accent => self.accent = value,
            ThemeRole::Bg => self.bg = value,
            ThemeRole::Text => self.text = value,
            ThemeRole::Panel => self.panel = value,
            ThemeRole::Muted => self.muted = value,
            ThemeRole::Border => self.border = value,
            ThemeRole::BorderStrong => self.border_strong = value,
        }
        self
    }

    /// `(--variable, value)` pairs in role order.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(String, String)> {
        ThemeRole::ALL
            .iter()
            .map(|role| (role.css_variable(), self.get(*role).to_string()))
            .collect()
    }
}

/// Loads and persists [`ThemeTokens`] through a key-value backend.
#[derive(Debug, Default)]
pub struct ThemeStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> ThemeStore<S> {
    /// Store over `storage`.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Underlying backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Defaults merged with persisted overrides.
    ///
    /// Unreadable or malformed entries are logged and yield the defaults.
    #[must_use]
    pub fn load(&self) -> ThemeTokens {
        let raw = match self.storage.get(THEME_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ThemeTokens::default(),
            Err(err) => {
                warn!(error = %err, "theme storage unreadable; using defaults");
                return ThemeTokens::default();
            }
        };
        let entries = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(entries)) => entries,
            Ok(_) => {
                warn!(key = THEME_KEY, "theme entry is not an object; using defaults");
                return ThemeTokens::default();
            }
            Err(err) => {
                warn!(error = %err, key = THEME_KEY, "malformed theme entry; using defaults");
                return ThemeTokens::default();
            }
        };
        merge_roles(&entries)
    }

    /// Persist the full token set.
    ///
    /// # Errors
    /// Returns an error when encoding fails or the backend rejects the write.
    pub fn save(&self, tokens: &ThemeTokens) -> ConfigResult<()> {
        let text = serde_json::to_string(tokens).map_err(|source| ConfigError::Encode {
            key: THEME_KEY,
            source,
        })?;
        self.storage.set(THEME_KEY, &text)?;
        debug!(key = THEME_KEY, "theme saved");
        Ok(())
    }

    /// Remove the persisted entry and return the defaults.
    ///
    /// # Errors
    /// Returns an error when the backend rejects the removal.
    pub fn reset(&self) -> ConfigResult<ThemeTokens> {
        self.storage.remove(THEME_KEY)?;
        debug!(key = THEME_KEY, "theme reset");
        Ok(ThemeTokens::default())
    }
}

/// Defaults overridden by every role whose stored value is a string.
fn merge_roles(entries: &Map<String, Value>) -> ThemeTokens {
    ThemeRole::ALL
        .into_iter()
        .fold(ThemeTokens::default(), |tokens, role| match entries.get(role.key()) {
            None => tokens,
            Some(Value::String(color)) => tokens.with_role(role, color.as_str()),
            Some(other) => {
                warn!(role = role.key(), value = %other, "ignoring non-string theme role");
                tokens
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_variable_names_are_kebab_case() {
        assert_eq!(css_variable_name("borderStrong"), "--border-strong");
        assert_eq!(css_variable_name("accent"), "--accent");
        assert_eq!(ThemeRole::Bg.css_variable(), "--bg");
    }

    #[test]
    fn css_variables_follow_role_order() {
        let vars = ThemeTokens::default().css_variables();
        assert_eq!(vars.len(), ThemeRole::ALL.len());
        assert_eq!(vars[0], ("--accent".to_string(), "#2a85ff".to_string()));
        assert_eq!(
            vars[6],
            ("--border-strong".to_string(), "#d9dde2".to_string())
        );
    }

    #[test]
    fn partial_json_merges_over_defaults() {
        let tokens: ThemeTokens =
            serde_json::from_str(r##"{"accent":"#ff0000","extra":"ignored"}"##)
                .expect("partial theme parses");
        assert_eq!(tokens.accent, "#ff0000");
        assert_eq!(tokens.bg, "#f7f7f5");
        assert_eq!(tokens.border_strong, "#d9dde2");
    }

    #[test]
    fn with_role_touches_one_role() {
        let tokens = ThemeTokens::default().with_role(ThemeRole::Panel, "#000000");
        assert_eq!(tokens.get(ThemeRole::Panel), "#000000");
        assert_eq!(tokens.get(ThemeRole::Accent), "#2a85ff");
    }
}
