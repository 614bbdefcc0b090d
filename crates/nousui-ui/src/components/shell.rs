use crate::core::tabs::AppTab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub active: AppTab,
    pub on_select: Callback<AppTab>,
    pub dark: bool,
    pub on_toggle_dark: Callback<()>,
    pub on_new: Callback<()>,
    pub on_export: Callback<()>,
    pub on_reset: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let dark_label = if props.dark { "☀ Light" } else { "🌙 Dark" };
    html! {
        <div class="app-shell">
            <header class="topbar">
                <div class="brand">
                    <strong>{"NousUI Lab"}</strong>
                    <span class="muted">{"Component workbench"}</span>
                </div>
                <div class="top-actions">
                    <button class="primary" onclick={emit_unit(&props.on_new)}>{"New component"}</button>
                    <button class="ghost" onclick={emit_unit(&props.on_export)}>{"Export JSON"}</button>
                    <button class="ghost danger" onclick={emit_unit(&props.on_reset)}>{"Reset DB"}</button>
                    <button class="ghost" aria-pressed={props.dark.to_string()} onclick={emit_unit(&props.on_toggle_dark)}>
                        {dark_label}
                    </button>
                </div>
            </header>
            <nav class="tabs" role="tablist">
                {for AppTab::ALL.into_iter().map(|tab| tab_button(tab, props.active, &props.on_select))}
            </nav>
            <main id={format!("panel-{}", props.active.slug())} role="tabpanel">
                {for props.children.iter()}
            </main>
        </div>
    }
}

fn tab_button(tab: AppTab, active: AppTab, on_select: &Callback<AppTab>) -> Html {
    let selected = tab == active;
    let onclick = {
        let on_select = on_select.clone();
        Callback::from(move |_| on_select.emit(tab))
    };
    html! {
        <button
            id={format!("tab-{}", tab.slug())}
            class={classes!("tab", selected.then_some("active"))}
            role="tab"
            aria-selected={selected.to_string()}
            onclick={onclick}
        >
            {tab.label()}
        </button>
    }
}

fn emit_unit(callback: &Callback<()>) -> Callback<MouseEvent> {
    let callback = callback.clone();
    Callback::from(move |_| callback.emit(()))
}
