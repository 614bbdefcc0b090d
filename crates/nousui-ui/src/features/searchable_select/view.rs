//! Filter box and candidate panel layered over a hidden native `<select>`.
//!
//! # Design
//! - Committing writes the native select and dispatches a bubbling `change`, so
//!   listeners on the select (or any ancestor) see the new value.
//! - The outside-click listener is registered only while the panel is open.

use crate::features::searchable_select::state::{
    DEFAULT_PLACEHOLDER, KeyOutcome, NO_RESULTS, SearchableSelectState, SelectKey, SelectOption,
};
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{EventInit, HtmlInputElement, HtmlSelectElement, Node};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchableSelectProps {
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub name: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_PLACEHOLDER))]
    pub placeholder: AttrValue,
    /// Shorter queries list every option.
    #[prop_or_default]
    pub min_chars: usize,
    /// Initially selected value.
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub on_change: Callback<String>,
}

#[function_component(SearchableSelect)]
pub(crate) fn searchable_select(props: &SearchableSelectProps) -> Html {
    let state = {
        let options = props.options.clone();
        let min_chars = props.min_chars;
        use_state(move || SearchableSelectState::new(options, min_chars))
    };
    let root_ref = use_node_ref();
    let select_ref = use_node_ref();

    {
        let state = state.clone();
        use_effect_with_deps(
            move |options: &Vec<SelectOption>| {
                let mut next = (*state).clone();
                next.set_items(options.clone());
                state.set(next);
                || ()
            },
            props.options.clone(),
        );
    }
    {
        let state = state.clone();
        let root_ref = root_ref.clone();
        use_effect_with_deps(
            move |current: &SearchableSelectState| {
                let current = current.clone();
                let listener = current.is_open().then(|| {
                    EventListener::new(&gloo::utils::document(), "click", move |event| {
                        let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
                        let inside = root_ref
                            .cast::<Node>()
                            .is_some_and(|root| root.contains(target.as_ref()));
                        if !inside {
                            let mut next = current.clone();
                            next.click_outside();
                            state.set(next);
                        }
                    })
                });
                move || drop(listener)
            },
            (*state).clone(),
        );
    }

    let on_input = {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*state).clone();
                next.filter(&input.value());
                state.set(next);
            }
        })
    };
    let on_focus = {
        let state = state.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*state).clone();
            next.focus();
            state.set(next);
        })
    };
    let on_keydown = {
        let state = state.clone();
        let select_ref = select_ref.clone();
        Callback::from(move |event: KeyboardEvent| {
            let Some(key) = SelectKey::from_key(&event.key()) else {
                return;
            };
            let mut next = (*state).clone();
            let outcome = next.key(key);
            if outcome.prevents_default() {
                event.prevent_default();
            }
            if let KeyOutcome::Committed(option) = &outcome {
                commit_native(&select_ref, option);
            }
            if outcome != KeyOutcome::Ignored {
                state.set(next);
            }
        })
    };
    let on_native_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit(select.value());
            }
        })
    };

    let panel = if state.candidates().is_empty() {
        html! { <div class="nous-search-empty">{NO_RESULTS}</div> }
    } else {
        html! {
            <>{for state.candidates().iter().enumerate().map(|(index, option)| {
                let highlighted = state.highlighted() == Some(index);
                let onclick = {
                    let state = state.clone();
                    let select_ref = select_ref.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = (*state).clone();
                        if let Some(chosen) = next.commit(index) {
                            commit_native(&select_ref, &chosen);
                            state.set(next);
                        }
                    })
                };
                html! {
                    <div
                        class={classes!("nous-search-item", highlighted.then_some("active"))}
                        role="option"
                        aria-selected={highlighted.to_string()}
                        onclick={onclick}
                    >
                        {option.text.clone()}
                    </div>
                }
            })}</>
        }
    };

    html! {
        <div class="nous-search" ref={root_ref}>
            <input
                class="nous-search-input"
                type="text"
                role="combobox"
                aria-expanded={state.is_open().to_string()}
                placeholder={props.placeholder.clone()}
                value={state.query().to_string()}
                oninput={on_input}
                onfocus={on_focus}
                onkeydown={on_keydown}
            />
            <div class="nous-search-panel" role="listbox" hidden={!state.is_open()}>
                {panel}
            </div>
            <select
                class="nous-search-native"
                name={props.name.clone()}
                ref={select_ref}
                onchange={on_native_change}
                tabindex="-1"
                aria-hidden="true"
            >
                {for props.options.iter().map(|option| html! {
                    <option value={option.value.clone()} selected={option.value == props.value.as_str()}>
                        {option.text.clone()}
                    </option>
                })}
            </select>
        </div>
    }
}

fn commit_native(select_ref: &NodeRef, option: &SelectOption) {
    let Some(select) = select_ref.cast::<HtmlSelectElement>() else {
        return;
    };
    select.set_value(&option.value);
    let init = EventInit::new();
    init.set_bubbles(true);
    match Event::new_with_event_init_dict("change", &init) {
        Ok(change) => {
            if let Err(err) = select.dispatch_event(&change) {
                console::error!("failed to dispatch change event", err);
            }
        }
        Err(err) => console::error!("failed to create change event", err),
    }
}
