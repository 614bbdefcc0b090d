//! Tone vocabularies shared by badges, toasts and progress bars.
//!
//! # Design
//! - Parsing never fails; each vocabulary has a documented fallback tone.
//! - Colors live here so widget styles and tests read the same table.

/// Colors used to paint a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgePalette {
    /// Pill background.
    pub background: &'static str,
    /// Text and dot color.
    pub foreground: &'static str,
    /// Outline color.
    pub border: &'static str,
}

/// Badge tone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    /// Grey, used for unknown values.
    #[default]
    Neutral,
    /// Green.
    Success,
    /// Amber.
    Warning,
    /// Red.
    Danger,
    /// Blue.
    Info,
    /// Accent blue.
    Accent,
}

impl BadgeTone {
    /// Every tone.
    pub const ALL: [Self; 6] = [
        Self::Neutral,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Info,
        Self::Accent,
    ];

    /// Parse a tone name; unknown names fall back to [`BadgeTone::Neutral`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            "info" => Self::Info,
            "accent" => Self::Accent,
            _ => Self::Neutral,
        }
    }

    /// Tone name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Accent => "accent",
        }
    }

    /// Background, foreground and border colors.
    #[must_use]
    pub const fn palette(self) -> BadgePalette {
        let (background, foreground, border) = match self {
            Self::Neutral => ("#e8e8e8", "#555", "#d5d5d5"),
            Self::Success => ("#dff5e3", "#1b7d36", "#bbf7d0"),
            Self::Warning => ("#fff3cd", "#856404", "#fde68a"),
            Self::Danger => ("#fde2e2", "#c0392b", "#fecaca"),
            Self::Info => ("#d0e7ff", "#1a5fb4", "#93c5fd"),
            Self::Accent => ("#d9ebff", "#2a85ff", "#93c5fd"),
        };
        BadgePalette {
            background,
            foreground,
            border,
        }
    }
}

/// Toast tone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastTone {
    /// Dark neutral toast without an icon.
    #[default]
    Default,
    /// Green check.
    Success,
    /// Red cross.
    Error,
    /// Blue information.
    Info,
    /// Amber warning.
    Warning,
    /// Red cross, used for destructive confirmations.
    Danger,
    /// Accent colored, no icon.
    Accent,
}

impl ToastTone {
    /// Parse a tone name; unknown names fall back to [`ToastTone::Default`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            "error" => Self::Error,
            "info" => Self::Info,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            "accent" => Self::Accent,
            _ => Self::Default,
        }
    }

    /// Tone name, also used as the CSS modifier class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Accent => "accent",
        }
    }

    /// Leading icon glyph, if the tone has one.
    #[must_use]
    pub const fn icon(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("✓"),
            Self::Error | Self::Danger => Some("✗"),
            Self::Info => Some("ℹ"),
            Self::Warning => Some("⚠"),
            Self::Default | Self::Accent => None,
        }
    }
}

/// Progress bar fill tone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProgressTone {
    /// Theme accent; the fallback.
    #[default]
    Accent,
    /// Green.
    Success,
    /// Amber.
    Warning,
    /// Red.
    Danger,
    /// Grey.
    Neutral,
}

impl ProgressTone {
    /// Parse a tone name; unknown names fall back to [`ProgressTone::Accent`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            "neutral" => Self::Neutral,
            _ => Self::Accent,
        }
    }

    /// Tone name, also used as the CSS modifier class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Neutral => "neutral",
        }
    }
}

/// Clamp an integer percentage into `0..=100`.
#[must_use]
pub fn clamp_percent(value: i64) -> u8 {
    u8::try_from(value.clamp(0, 100)).unwrap_or(0)
}

/// Read a percentage from attribute-style text.
///
/// Takes the leading integer (`"42.9"` is 42, `"7px"` is 7); text without one is 0.
#[must_use]
pub fn parse_percent(raw: &str) -> u8 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 || negative {
        return 0;
    }
    // Anything too long for i64 is far above 100.
    digits[..end].parse::<i64>().map_or(100, clamp_percent)
}
