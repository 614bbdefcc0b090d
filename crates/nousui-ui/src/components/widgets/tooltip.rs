use crate::core::registry::WidgetTag;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TooltipProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Tooltip)]
pub(crate) fn tooltip(props: &TooltipProps) -> Html {
    html! {
        <span class={WidgetTag::Tooltip.scope_class()}>
            <span class="tip" role="tooltip">{props.text.clone()}</span>
            { for props.children.iter() }
        </span>
    }
}
