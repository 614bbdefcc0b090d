use nousui_config::{ThemeRole, ThemeTokens};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeEditorProps {
    /// Tokens currently applied to the page.
    pub tokens: ThemeTokens,
    pub on_save: Callback<ThemeTokens>,
    pub on_reset: Callback<()>,
}

#[function_component(ThemeEditor)]
pub(crate) fn theme_editor(props: &ThemeEditorProps) -> Html {
    let draft = use_state(|| props.tokens.clone());
    {
        let draft = draft.clone();
        use_effect_with_deps(
            move |tokens: &ThemeTokens| {
                draft.set(tokens.clone());
                || ()
            },
            props.tokens.clone(),
        );
    }

    let on_save = {
        let draft = draft.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit((*draft).clone()))
    };
    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <section class="theme-editor">
            <h2>{"Theme"}</h2>
            <p class="muted">{"Pick colors, then save to keep them across visits."}</p>
            <div class="theme-grid">
                {for ThemeRole::EDITABLE.into_iter().map(|role| {
                    let oninput = {
                        let draft = draft.clone();
                        Callback::from(move |event: InputEvent| {
                            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                                draft.set((*draft).clone().with_role(role, input.value()));
                            }
                        })
                    };
                    html! {
                        <label class="field swatch">
                            <span>{role.label()}</span>
                            <input type="color" value={draft.get(role).to_string()} oninput={oninput} />
                            <code>{draft.get(role).to_string()}</code>
                        </label>
                    }
                })}
            </div>
            <div class="form-actions">
                <button class="ghost" onclick={on_reset}>{"Restore defaults"}</button>
                <button class="primary" onclick={on_save}>{"Save theme"}</button>
            </div>
        </section>
    }
}
