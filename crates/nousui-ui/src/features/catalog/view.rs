//! Catalog tab: KPIs, filters, the component table and the creation form.
//!
//! # Design
//! - Rows and filters come from the shared store through selectors.
//! - Mutations run on the local executor via [`spawn_action`] and land back through `Dispatch`.

use crate::app::AppServices;
use crate::components::empty_state::EmptyState;
use crate::components::widgets::{Badge, Card, Modal};
use crate::core::store::AppStore;
use crate::features::catalog::actions::{CatalogAction, perform};
use crate::features::catalog::error::CatalogError;
use crate::features::catalog::logic::{
    ComponentDraft, EmptyCatalog, TYPE_OPTIONS, format_created, instant_from_millis, status_label, status_tone,
};
use crate::features::catalog::state::{Counters, StatusFilter};
use gloo::console;
use nousui_catalog::{ComponentRecord, ComponentStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Run a catalog action in the background and fold its outcome into the store.
pub(crate) fn spawn_action(services: &AppServices, dispatch: &Dispatch<AppStore>, action: CatalogAction) {
    let services = services.clone();
    let dispatch = dispatch.clone();
    spawn_local(async move {
        let closes_form = matches!(action, CatalogAction::Create(_));
        let now = instant_from_millis(js_sys::Date::now());
        match perform(services.store.as_ref(), &services.confirm, action, now).await {
            Ok(Some(applied)) => dispatch.reduce_mut(|store| {
                if closes_form {
                    store.catalog.form_open = false;
                }
                store.apply_refresh(applied.rows, Some(applied.notice));
            }),
            Ok(None) => {}
            Err(err) => {
                if !matches!(err, CatalogError::Validation { .. }) {
                    console::error!(format!("catalog action failed: {err}"));
                }
                let notice = err.notice();
                dispatch.reduce_mut(|store| {
                    store.toasts.push(notice);
                });
            }
        }
    });
}

#[derive(Properties, PartialEq)]
pub(crate) struct CatalogPanelProps {
    pub services: AppServices,
}

#[function_component(CatalogPanel)]
pub(crate) fn catalog_panel(props: &CatalogPanelProps) -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let visible = use_selector(|store: &AppStore| store.catalog.visible());
    let counters = use_selector(|store: &AppStore| store.catalog.counters());
    let filter = use_selector(|store: &AppStore| store.catalog.filter.clone());
    let search = use_selector(|store: &AppStore| store.catalog.search.clone());
    let form_open = use_selector(|store: &AppStore| store.catalog.form_open);

    let on_filter = dispatch.reduce_mut_callback_with(|store, event: Event| {
        if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
            store.catalog.filter = StatusFilter::parse(&select.value());
        }
    });
    let on_search = dispatch.reduce_mut_callback_with(|store, event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            store.catalog.search = input.value();
        }
    });
    let open_form: Callback<MouseEvent> =
        dispatch.reduce_mut_callback(|store| store.catalog.form_open = true);
    let close_form: Callback<()> =
        dispatch.reduce_mut_callback(|store| store.catalog.form_open = false);
    let act = {
        let services = props.services.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |action: CatalogAction| spawn_action(&services, &dispatch, action))
    };
    let on_submit = act.reform(CatalogAction::Create);

    let body = if let Some(reason) = EmptyCatalog::classify(counters.total, visible.len()) {
        let create = reason.offers_create().then(|| {
            html! { <button class="primary" onclick={open_form}>{"New component"}</button> }
        });
        html! {
            <EmptyState glyph={reason.glyph()} headline={reason.headline()} hint={reason.hint()}>
                {for create}
            </EmptyState>
        }
    } else {
        html! {
            <table class="catalog-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Type"}</th>
                        <th>{"Status"}</th>
                        <th>{"Notes"}</th>
                        <th>{"Created"}</th>
                        <th class="actions">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for visible.iter().map(|record| render_row(record, &act))}
                </tbody>
            </table>
        }
    };

    html! {
        <section class="catalog">
            {render_kpis(*counters)}
            <div class="catalog-toolbar">
                <label class="field">
                    <span>{"Status"}</span>
                    <select onchange={on_filter}>
                        {for StatusFilter::OPTIONS.into_iter().map(|value| html! {
                            <option value={value} selected={filter.as_str() == value}>{value}</option>
                        })}
                    </select>
                </label>
                <label class="field grow">
                    <span>{"Search"}</span>
                    <input
                        type="search"
                        placeholder="Search by name"
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                </label>
            </div>
            {body}
            <ComponentForm open={*form_open} on_submit={on_submit} on_close={close_form} />
        </section>
    }
}

fn render_kpis(counters: Counters) -> Html {
    let tiles = [
        ("Total", counters.total, None),
        ("Ready", counters.ready, Some("#16a34a")),
        ("Testing", counters.testing, Some("#d97706")),
        ("Draft", counters.draft, Some("var(--muted)")),
    ];
    html! {
        <div class="kpis">
            {for tiles.into_iter().map(|(label, value, accent)| html! {
                <Card title={AttrValue::from(label)} accent={accent.map(AttrValue::from)}>
                    <strong class="kpi-value">{value.to_string()}</strong>
                </Card>
            })}
        </div>
    }
}

fn render_row(record: &ComponentRecord, act: &Callback<CatalogAction>) -> Html {
    let promote = {
        let act = act.clone();
        let record = record.clone();
        Callback::from(move |_| act.emit(CatalogAction::Promote(record.clone())))
    };
    let delete = {
        let act = act.clone();
        let record = record.clone();
        Callback::from(move |_| act.emit(CatalogAction::Delete(record.clone())))
    };
    html! {
        <tr key={record.id.get()}>
            <td class="name">{record.name.clone()}</td>
            <td>{record.kind.clone()}</td>
            <td><Badge tone={status_tone(&record.status)}>{status_label(&record.status)}</Badge></td>
            <td class="muted">{record.notes.clone()}</td>
            <td class="muted">{format_created(&record.created_at)}</td>
            <td class="actions">
                <button class="ghost" title="Advance status" onclick={promote}>{"Promote"}</button>
                <button class="ghost danger" onclick={delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
struct ComponentFormProps {
    open: bool,
    on_submit: Callback<ComponentDraft>,
    on_close: Callback<()>,
}

#[function_component(ComponentForm)]
fn component_form(props: &ComponentFormProps) -> Html {
    let draft = use_state(ComponentDraft::default);
    {
        let draft = draft.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if *open {
                    draft.set(ComponentDraft::default());
                }
                || ()
            },
            props.open,
        );
    }

    let edit = |apply: fn(&mut ComponentDraft, String)| {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        }
    };
    let on_name = {
        let set = edit(|draft, value| draft.name = value);
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                set(input.value());
            }
        })
    };
    let on_kind = {
        let set = edit(|draft, value| draft.kind = value);
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                set(select.value());
            }
        })
    };
    let on_status = {
        let set = edit(|draft, value| draft.status = ComponentStatus::parse(&value));
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                set(select.value());
            }
        })
    };
    let on_notes = {
        let set = edit(|draft, value| draft.notes = value);
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                set(area.value());
            }
        })
    };
    let on_submit = {
        let draft = draft.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            submit.emit((*draft).clone());
        })
    };
    let cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal open={props.open} title="New component" on_close={props.on_close.clone()}>
            <form class="component-form" onsubmit={on_submit}>
                <label class="field">
                    <span>{"Name"}</span>
                    <input value={draft.name.clone()} oninput={on_name} placeholder="e.g. Profile Card" />
                </label>
                <label class="field">
                    <span>{"Type"}</span>
                    <select onchange={on_kind}>
                        {for TYPE_OPTIONS.into_iter().map(|kind| html! {
                            <option value={kind} selected={draft.kind == kind}>{kind}</option>
                        })}
                    </select>
                </label>
                <label class="field">
                    <span>{"Status"}</span>
                    <select onchange={on_status}>
                        {for ComponentStatus::CYCLE.iter().map(|status| html! {
                            <option value={status.as_str().to_string()} selected={draft.status == *status}>
                                {status_label(status)}
                            </option>
                        })}
                    </select>
                </label>
                <label class="field">
                    <span>{"Notes"}</span>
                    <textarea rows="3" value={draft.notes.clone()} oninput={on_notes} />
                </label>
                <div class="form-actions">
                    <button type="button" class="ghost" onclick={cancel}>{"Cancel"}</button>
                    <button type="submit" class="primary">{"Save"}</button>
                </div>
            </form>
        </Modal>
    }
}
