//! Scoped stylesheets for the widget library.
//!
//! Every rule is nested under the widget's scope class and every animation
//! name is prefixed with the widget tag, so widget styles cannot reach host
//! markup and host rules written against plain class names cannot reach in.

use crate::core::registry::WidgetTag;
use crate::core::tone::{BadgeTone, ProgressTone, ToastTone};
use std::fmt::Write;

/// Background of a toast entry.
#[must_use]
pub const fn toast_background(tone: ToastTone) -> &'static str {
    match tone {
        ToastTone::Success => "#16a34a",
        ToastTone::Error | ToastTone::Danger => "#dc2626",
        ToastTone::Info => "#2563eb",
        ToastTone::Warning => "#d97706",
        ToastTone::Accent => "var(--accent, #2a85ff)",
        ToastTone::Default => "#2f3437",
    }
}

/// Fill color of a progress bar.
#[must_use]
pub const fn progress_fill(tone: ProgressTone) -> &'static str {
    match tone {
        ProgressTone::Accent => "var(--accent, #2a85ff)",
        ProgressTone::Success => "#22c55e",
        ProgressTone::Warning => "#f59e0b",
        ProgressTone::Danger => "#ef4444",
        ProgressTone::Neutral => "#6b7280",
    }
}

/// Animation name owned by `widget`.
#[must_use]
pub fn animation_name(widget: WidgetTag, name: &str) -> String {
    format!("{}-{name}", widget.tag())
}

struct Sheet {
    widget: WidgetTag,
    scope: String,
    css: String,
}

impl Sheet {
    fn new(widget: WidgetTag) -> Self {
        Self {
            widget,
            scope: widget.scope_class(),
            css: String::new(),
        }
    }

    fn rule(mut self, suffix: &str, declarations: &str) -> Self {
        let _ = writeln!(self.css, ".{}{suffix} {{ {declarations} }}", self.scope);
        self
    }

    fn keyframes(mut self, name: &str, body: &str) -> Self {
        let _ = writeln!(
            self.css,
            "@keyframes {} {{ {body} }}",
            animation_name(self.widget, name)
        );
        self
    }

    fn finish(self) -> String {
        self.css
    }
}

/// Stylesheet for `widget`, confined to its scope class.
#[must_use]
pub fn stylesheet(widget: WidgetTag) -> String {
    match widget {
        WidgetTag::Card => card(),
        WidgetTag::Badge => badge(),
        WidgetTag::Modal => modal(),
        WidgetTag::Toast => toast(),
        WidgetTag::Progress => progress(),
        WidgetTag::Tooltip => tooltip(),
    }
}

fn card() -> String {
    Sheet::new(WidgetTag::Card)
        .rule(
            "",
            "display:block; position:relative; border:1px solid var(--border, #e4e7eb); \
             background:var(--panel, #fff); border-radius:12px; padding:14px 14px 14px 18px; \
             transition:box-shadow .2s, transform .2s; overflow:hidden;",
        )
        .rule(
            "::before",
            "content:''; position:absolute; left:0; top:0; bottom:0; width:4px; \
             background:var(--nous-card-accent, var(--accent, #2a85ff)); border-radius:12px 0 0 12px;",
        )
        .rule(
            ":hover",
            "box-shadow:0 6px 16px rgba(0,0,0,.08); transform:translateY(-2px);",
        )
        .rule(
            " > .title",
            "font-weight:600; margin-bottom:10px; color:var(--text, #2f3437);",
        )
        .finish()
}

fn badge() -> String {
    let mut sheet = Sheet::new(WidgetTag::Badge)
        .rule(
            "",
            "display:inline-flex; align-items:center; gap:6px; padding:2px 9px; \
             border-radius:999px; font-size:.75rem; font-weight:600; border:1px solid transparent;",
        )
        .rule(
            "::before",
            "content:''; width:6px; height:6px; border-radius:50%; background:currentColor;",
        );
    for tone in BadgeTone::ALL {
        let palette = tone.palette();
        sheet = sheet.rule(
            &format!(".tone-{}", tone.as_str()),
            &format!(
                "background:{}; color:{}; border-color:{};",
                palette.background, palette.foreground, palette.border
            ),
        );
    }
    sheet.finish()
}

fn modal() -> String {
    let slide_up = animation_name(WidgetTag::Modal, "slide-up");
    Sheet::new(WidgetTag::Modal)
        .rule("", "position:fixed; inset:0; z-index:9999;")
        .rule(
            " > .backdrop",
            "position:absolute; inset:0; background:rgba(15,23,42,.28); backdrop-filter:blur(4px); \
             border:0; padding:0; cursor:default;",
        )
        .rule(
            " > .panel",
            &format!(
                "position:relative; max-width:560px; margin:8vh auto 0; background:var(--panel, #fff); \
                 border:1px solid var(--border, #e5e7eb); border-radius:14px; padding:16px; \
                 box-shadow:0 18px 40px rgba(15,23,42,.14); animation:{slide_up} .25s ease;"
            ),
        )
        .rule(
            " .top",
            "display:flex; justify-content:space-between; align-items:center; margin-bottom:12px;",
        )
        .rule(" .title", "font-weight:700; color:var(--text, #2f3437);")
        .rule(
            " .close",
            "border:1px solid var(--border-strong, #d7dbe0); background:var(--panel, #fff); \
             border-radius:10px; cursor:pointer; padding:6px 10px; color:var(--text, #2f3437); \
             transition:background .15s;",
        )
        .rule(" .close:hover", "background:var(--bg, #f8f8f7);")
        .keyframes(
            "slide-up",
            "from { opacity:0; transform:translateY(12px); } to { opacity:1; transform:translateY(0); }",
        )
        .finish()
}

fn toast() -> String {
    let slide_up = animation_name(WidgetTag::Toast, "slide-up");
    let fade_out = animation_name(WidgetTag::Toast, "fade-out");
    let mut sheet = Sheet::new(WidgetTag::Toast)
        .rule(
            "",
            "position:fixed; right:16px; bottom:16px; z-index:10000; display:flex; \
             flex-direction:column; gap:8px; pointer-events:none;",
        )
        .rule(
            " > .toast",
            &format!(
                "display:flex; align-items:center; gap:8px; border-radius:10px; padding:10px 16px; \
                 font-size:.88rem; font-weight:500; color:#fff; pointer-events:auto; \
                 box-shadow:0 8px 20px rgba(0,0,0,.16); animation:{slide_up} .3s ease;"
            ),
        )
        .rule(
            " > .toast.fading",
            &format!("animation:{fade_out} .4s ease forwards;"),
        )
        .rule(" .icon", "font-size:1.1rem;");
    for tone in [
        ToastTone::Default,
        ToastTone::Success,
        ToastTone::Error,
        ToastTone::Info,
        ToastTone::Warning,
        ToastTone::Danger,
        ToastTone::Accent,
    ] {
        sheet = sheet.rule(
            &format!(" > .toast.{}", tone.as_str()),
            &format!("background:{};", toast_background(tone)),
        );
    }
    sheet
        .keyframes(
            "slide-up",
            "from { opacity:0; transform:translateY(10px); } to { opacity:1; transform:translateY(0); }",
        )
        .keyframes("fade-out", "to { opacity:0; transform:translateY(-6px); }")
        .finish()
}

fn progress() -> String {
    let mut sheet = Sheet::new(WidgetTag::Progress)
        .rule("", "display:block;")
        .rule(
            " > .track",
            "position:relative; height:22px; border-radius:10px; overflow:hidden; \
             background:var(--bg, #f3f4f6); border:1px solid var(--border, #e4e7eb);",
        )
        .rule(
            " .fill",
            "height:100%; border-radius:10px; transition:width .4s ease; display:flex; \
             align-items:center; justify-content:center; font-size:.72rem; font-weight:700; \
             color:#fff; min-width:28px;",
        );
    for tone in [
        ProgressTone::Accent,
        ProgressTone::Success,
        ProgressTone::Warning,
        ProgressTone::Danger,
        ProgressTone::Neutral,
    ] {
        sheet = sheet.rule(
            &format!(" .fill.{}", tone.as_str()),
            &format!("background:{};", progress_fill(tone)),
        );
    }
    sheet.finish()
}

fn tooltip() -> String {
    Sheet::new(WidgetTag::Tooltip)
        .rule("", "position:relative; display:inline-block;")
        .rule(
            " > .tip",
            "position:absolute; bottom:calc(100% + 8px); left:50%; transform:translateX(-50%); \
             background:#1f2937; color:#fff; font-size:.78rem; padding:5px 10px; border-radius:8px; \
             white-space:nowrap; pointer-events:none; opacity:0; transition:opacity .2s;",
        )
        .rule(
            " > .tip::after",
            "content:''; position:absolute; top:100%; left:50%; transform:translateX(-50%); \
             border:5px solid transparent; border-top-color:#1f2937;",
        )
        .rule(":hover > .tip", "opacity:1;")
        .finish()
}
