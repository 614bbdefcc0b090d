//! DOM side of preferences and downloads.

use crate::features::catalog::logic::ExportFile;
use gloo::console;
use js_sys::Array;
use nousui_config::{BODY_CLASS, DarkModePreference, ThemeTokens};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlElement, Url};

/// Write every theme color as a custom property on the document element.
pub(crate) fn apply_theme(tokens: &ThemeTokens) {
    let Some(root) = gloo::utils::document()
        .document_element()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        console::warn!("document element unavailable; theme not applied");
        return;
    };
    let style = root.style();
    for (name, value) in tokens.css_variables() {
        if let Err(err) = style.set_property(&name, &value) {
            console::warn!(format!("failed to set {name}"), err);
        }
    }
}

/// Toggle the dark class on `<body>`.
pub(crate) fn apply_dark_mode(preference: DarkModePreference) {
    let classes = gloo::utils::body().class_list();
    if let Err(err) = classes.toggle_with_force(BODY_CLASS, preference.enabled()) {
        console::warn!("failed to toggle dark mode class", err);
    }
}

/// Hand `file` to the browser as a download.
pub(crate) fn download(file: &ExportFile) -> Result<(), String> {
    let parts = Array::of1(&JsValue::from_str(&file.contents));
    let options = BlobPropertyBag::new();
    options.set_type(file.mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(describe)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(describe)?;
    let clicked = gloo::utils::document()
        .create_element("a")
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().map_err(JsValue::from))
        .map(|anchor| {
            anchor.set_href(&url);
            anchor.set_download(&file.filename);
            anchor.click();
        });
    if let Err(err) = Url::revoke_object_url(&url) {
        console::warn!("failed to revoke export url", err);
    }
    clicked.map_err(describe)
}

#[allow(clippy::needless_pass_by_value)]
fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
