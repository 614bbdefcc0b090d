//! Accessible percentage bar.

use crate::core::registry::WidgetTag;
use crate::core::tone::{ProgressTone, clamp_percent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ProgressProps {
    /// Percentage; clamped into `0..=100`.
    pub value: i64,
    #[prop_or_default]
    pub tone: ProgressTone,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(Progress)]
pub(crate) fn progress(props: &ProgressProps) -> Html {
    let value = clamp_percent(props.value);
    html! {
        <div class={WidgetTag::Progress.scope_class()}>
            <div
                class="track"
                role="progressbar"
                aria-label={props.label.clone()}
                aria-valuenow={value.to_string()}
                aria-valuemin="0"
                aria-valuemax="100"
            >
                <div class={classes!("fill", props.tone.as_str())} style={format!("width:{value}%")}>
                    {format!("{value}%")}
                </div>
            </div>
        </div>
    }
}
