use crate::core::registry::WidgetTag;
use crate::core::tone::BadgeTone;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BadgeProps {
    #[prop_or_default]
    pub tone: BadgeTone,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Badge)]
pub(crate) fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!(WidgetTag::Badge.scope_class(), format!("tone-{}", props.tone.as_str()))}>
            { for props.children.iter() }
        </span>
    }
}
