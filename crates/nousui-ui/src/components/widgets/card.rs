use crate::core::registry::WidgetTag;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Stripe color; the theme accent when unset.
    #[prop_or_default]
    pub accent: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub(crate) fn card(props: &CardProps) -> Html {
    let style = props
        .accent
        .as_ref()
        .map(|accent| format!("--nous-card-accent:{accent}"));
    html! {
        <article class={classes!(WidgetTag::Card.scope_class(), props.class.clone())} style={style}>
            {props.title.clone().map(|title| html! {
                <header class="title">{title}</header>
            }).unwrap_or_default()}
            <section class="body">{ for props.children.iter() }</section>
        </article>
    }
}
