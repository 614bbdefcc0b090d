//! Dialog with backdrop, close button and Escape handling.
//!
//! # Design
//! - Page scrolling is locked while open and restored on close or unmount.
//! - The Escape listener lives only as long as the dialog is open and always calls the current `on_close`.

use crate::core::latest::Latest;
use crate::core::registry::WidgetTag;
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    let on_close = {
        let initial = props.on_close.clone();
        use_memo(move |_| Latest::new(initial), ())
    };
    on_close.replace(props.on_close.clone());
    {
        let on_close = (*on_close).clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = open.then(|| {
                    set_body_overflow("hidden");
                    EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                        let escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|event| event.key() == "Escape");
                        if escape {
                            on_close.get().emit(());
                        }
                    })
                });
                move || {
                    if listener.is_some() {
                        set_body_overflow("");
                    }
                    drop(listener);
                }
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={WidgetTag::Modal.scope_class()} role="dialog" aria-modal="true" aria-label={props.title.clone()}>
            <button class="backdrop" aria-label="Close" onclick={close.clone()}></button>
            <div class="panel">
                <div class="top">
                    <h3 class="title">{props.title.clone()}</h3>
                    <button class="close" aria-label="Close" onclick={close}>{"✕"}</button>
                </div>
                <div class="content">{ for props.children.iter() }</div>
            </div>
        </div>
    }
}

fn set_body_overflow(value: &str) {
    if let Err(err) = gloo::utils::body().style().set_property("overflow", value) {
        console::warn!("failed to update body overflow", err);
    }
}
