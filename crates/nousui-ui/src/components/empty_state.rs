//! Status panel shown in place of an empty table.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    /// Decorative symbol, hidden from assistive tech.
    pub glyph: AttrValue,
    pub headline: AttrValue,
    pub hint: AttrValue,
    /// Follow-up actions; empty children render nothing.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let actions = (!props.children.is_empty()).then(|| {
        html! { <footer class="empty-actions">{ for props.children.iter() }</footer> }
    });
    html! {
        <section class="empty-state" role="status">
            <span class="empty-glyph" aria-hidden="true">{props.glyph.clone()}</span>
            <h4>{props.headline.clone()}</h4>
            <p class="muted">{props.hint.clone()}</p>
            {actions.unwrap_or_default()}
        </section>
    }
}
