//! Stacked, self-dismissing notifications.
//!
//! # Design
//! - Each toast owns its timer; dropping the component cancels it.
//! - Dismissal is two-phase: fade first, then removal once the fade has run.

use crate::core::registry::WidgetTag;
use crate::core::toasts::{FADE_MS, ToastEntry, ToastPhase};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<ToastEntry>,
    pub on_fade: Callback<u64>,
    pub on_remove: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class={WidgetTag::Toast.scope_class()} aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|entry| html! {
                <ToastItem
                    key={entry.id}
                    entry={entry.clone()}
                    on_fade={props.on_fade.clone()}
                    on_remove={props.on_remove.clone()}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    entry: ToastEntry,
    on_fade: Callback<u64>,
    on_remove: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let entry = &props.entry;
    {
        let id = entry.id;
        let timeout_ms = entry.timeout_ms;
        let on_fade = props.on_fade.clone();
        let on_remove = props.on_remove.clone();
        use_effect_with_deps(
            move |phase: &ToastPhase| {
                let timer = match phase {
                    ToastPhase::Visible => Timeout::new(timeout_ms, move || on_fade.emit(id)),
                    ToastPhase::Fading => Timeout::new(FADE_MS, move || on_remove.emit(id)),
                };
                move || drop(timer)
            },
            entry.phase,
        );
    }

    let fading = (entry.phase == ToastPhase::Fading).then_some("fading");
    html! {
        <div class={classes!("toast", entry.tone.as_str(), fading)} role="status">
            {entry.tone.icon().map(|icon| html! {
                <span class="icon" aria-hidden="true">{icon}</span>
            }).unwrap_or_default()}
            <span class="message">{entry.message.clone()}</span>
        </div>
    }
}
