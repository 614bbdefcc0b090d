//! Style-isolated widget library.
//!
//! # Design
//! - Each widget root carries its scope class; the scoped stylesheet is injected once per tag.
//! - Registration goes through the shared [`WidgetRegistry`], so repeat installs are no-ops.

use crate::core::registry::{WidgetDefinition, WidgetRegistry};
use gloo::console;
use std::cell::RefCell;

mod badge;
mod card;
mod modal;
mod progress;
mod toast;
mod tooltip;

pub(crate) use badge::Badge;
pub(crate) use card::Card;
pub(crate) use modal::Modal;
pub(crate) use progress::Progress;
pub(crate) use toast::ToastHost;
pub(crate) use tooltip::Tooltip;

thread_local! {
    static REGISTRY: RefCell<WidgetRegistry> = const { RefCell::new(WidgetRegistry::new()) };
}

/// Register every widget and inject the stylesheets of newly registered ones.
pub(crate) fn install_widgets() {
    let fresh = REGISTRY.with(|registry| registry.borrow_mut().register_builtins());
    for definition in &fresh {
        inject_stylesheet(definition);
    }
}

fn inject_stylesheet(definition: &WidgetDefinition) {
    let document = gloo::utils::document();
    let Some(head) = document.head() else {
        console::warn!("document has no <head>; widget styles skipped");
        return;
    };
    let style = match document.create_element("style") {
        Ok(style) => style,
        Err(err) => {
            console::error!("failed to create widget stylesheet", err);
            return;
        }
    };
    if let Err(err) = style.set_attribute("data-nous-widget", definition.tag) {
        console::warn!("failed to tag widget stylesheet", err);
    }
    style.set_text_content(Some(&definition.stylesheet));
    if let Err(err) = head.append_child(&style) {
        console::error!("failed to inject widget stylesheet", err);
    }
}
