//! Overlay answering [`ConfirmService`] questions.
//!
//! # Design
//! - Mirrors the pending question through the service observer.
//! - Backdrop click and Escape answer `false`; only the confirm button answers `true`.

use crate::core::confirm::{ConfirmRequest, ConfirmService};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ConfirmOverlayProps {
    pub service: ConfirmService,
}

#[function_component(ConfirmOverlay)]
pub(crate) fn confirm_overlay(props: &ConfirmOverlayProps) -> Html {
    let pending = use_state(|| props.service.pending());
    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |service: &ConfirmService| {
                pending.set(service.pending());
                service.observe(move |request| pending.set(request));
                let service = service.clone();
                move || service.unobserve()
            },
            props.service.clone(),
        );
    }
    {
        let service = props.service.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = open.then(|| {
                    EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                        let escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|event| event.key() == "Escape");
                        if escape {
                            service.resolve(false);
                        }
                    })
                });
                move || drop(listener)
            },
            pending.is_some(),
        );
    }

    let Some(ConfirmRequest { title, message }) = (*pending).clone() else {
        return html! {};
    };
    let answer = |accepted: bool| {
        let service = props.service.clone();
        Callback::from(move |_: MouseEvent| {
            service.resolve(accepted);
        })
    };

    html! {
        <div class="confirm-overlay" role="alertdialog" aria-modal="true" aria-labelledby="confirm-title">
            <button class="confirm-backdrop" aria-label="Cancel" onclick={answer(false)}></button>
            <div class="confirm-panel">
                <h3 id="confirm-title">{title}</h3>
                <p>{message}</p>
                <div class="confirm-actions">
                    <button class="ghost" onclick={answer(false)}>{"Cancel"}</button>
                    <button class="danger" onclick={answer(true)}>{"Confirm"}</button>
                </div>
            </div>
        </div>
    }
}
