//! Live demos of every widget.

use crate::components::widgets::{Badge, Card, Modal, Progress, Tooltip};
use crate::core::store::AppStore;
use crate::core::toasts::Notice;
use crate::core::tone::{BadgeTone, ProgressTone, ToastTone, parse_percent};
use crate::features::searchable_select::state::SelectOption;
use crate::features::searchable_select::view::SearchableSelect;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

const FRAMEWORKS: [(&str, &str); 8] = [
    ("Yew", "yew"),
    ("Leptos", "leptos"),
    ("Dioxus", "dioxus"),
    ("Sycamore", "sycamore"),
    ("Seed", "seed"),
    ("Perseus", "perseus"),
    ("Iced", "iced"),
    ("Slint", "slint"),
];

const PROGRESS_TONES: [ProgressTone; 5] = [
    ProgressTone::Accent,
    ProgressTone::Success,
    ProgressTone::Warning,
    ProgressTone::Danger,
    ProgressTone::Neutral,
];

#[function_component(WidgetGallery)]
pub(crate) fn widget_gallery() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let modal_open = use_state(|| false);
    let percent = use_state(|| 64_u8);
    let framework = use_state(String::new);
    let tone_name = use_state(|| "success".to_string());
    let options = use_memo(
        |_| {
            FRAMEWORKS
                .iter()
                .map(|(text, value)| SelectOption::new(text, *value))
                .collect::<Vec<_>>()
        },
        (),
    );

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |()| modal_open.set(false))
    };
    let demo_toast: Callback<MouseEvent> = dispatch.reduce_mut_callback(|store| {
        store
            .toasts
            .push(Notice::new(ToastTone::Accent, "Demo toast 🎉"));
    });
    let on_percent = {
        let percent = percent.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                percent.set(parse_percent(&input.value()));
            }
        })
    };
    let on_tone_name = {
        let tone_name = tone_name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                tone_name.set(input.value());
            }
        })
    };
    let tone_toast = {
        let tone_name = tone_name.clone();
        Callback::from(move |_: MouseEvent| {
            let tone = ToastTone::parse(tone_name.trim());
            dispatch.reduce_mut(|store| {
                store
                    .toasts
                    .push(Notice::new(tone, format!("Toast tone: {}", tone.as_str())));
            });
        })
    };
    let badge_tone = BadgeTone::parse(tone_name.trim());
    let progress_tone = ProgressTone::parse(tone_name.trim());
    let on_framework = {
        let framework = framework.clone();
        Callback::from(move |value: String| framework.set(value))
    };

    html! {
        <section class="gallery">
            <div class="gallery-grid">
                <Card title={AttrValue::from("Card")}>
                    <p>{"Panel with a theme-colored stripe."}</p>
                </Card>
                <Card title={AttrValue::from("Accent override")} accent={Some(AttrValue::from("#16a34a"))}>
                    <p>{"Same card, custom stripe color."}</p>
                </Card>
                <Card title={AttrValue::from("Badges")}>
                    <div class="row">
                        {for BadgeTone::ALL.into_iter().map(|tone| html! {
                            <Badge tone={tone}>{tone.as_str()}</Badge>
                        })}
                    </div>
                </Card>
                <Card title={AttrValue::from("Overlays")}>
                    <div class="row">
                        <button class="primary" onclick={open_modal}>{"Open modal"}</button>
                        <button class="ghost" onclick={demo_toast}>{"Show toast"}</button>
                        <Tooltip text="Tooltips appear on hover and focus">
                            <button class="ghost">{"Hover me"}</button>
                        </Tooltip>
                    </div>
                </Card>
                <Card title={AttrValue::from("Progress")}>
                    <input
                        type="range"
                        min="0"
                        max="100"
                        aria-label="Progress value"
                        value={percent.to_string()}
                        oninput={on_percent}
                    />
                    {for PROGRESS_TONES.into_iter().map(|tone| html! {
                        <Progress value={i64::from(*percent)} tone={tone} label={Some(AttrValue::from(tone.as_str()))} />
                    })}
                </Card>
                <Card title={AttrValue::from("Tone playground")}>
                    <input
                        type="text"
                        aria-label="Tone name"
                        placeholder="success, danger, accent..."
                        value={(*tone_name).clone()}
                        oninput={on_tone_name}
                    />
                    <div class="row">
                        <Badge tone={badge_tone}>{badge_tone.as_str()}</Badge>
                        <button class="ghost" onclick={tone_toast}>{"Toast in this tone"}</button>
                    </div>
                    <Progress value={i64::from(*percent)} tone={progress_tone} label={Some(AttrValue::from(progress_tone.as_str()))} />
                </Card>
                <Card title={AttrValue::from("Searchable select")}>
                    <SearchableSelect
                        name="framework"
                        options={(*options).clone()}
                        on_change={on_framework}
                    />
                    <p class="muted">
                        {if framework.is_empty() {
                            "Nothing selected".to_string()
                        } else {
                            format!("Selected value: {}", *framework)
                        }}
                    </p>
                </Card>
            </div>
            <Modal open={*modal_open} title="Demo modal" on_close={close_modal}>
                <p>{"Press Escape, click the backdrop or use the close button."}</p>
            </Modal>
        </section>
    }
}
