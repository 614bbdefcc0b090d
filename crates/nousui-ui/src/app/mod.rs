//! Root component, service wiring and the wasm entry point.
//!
//! # Design
//! - The store handle and confirmation slot are created once and shared as [`AppServices`].
//! - Boot opens the database and loads rows; failures surface as a toast instead of a blank page.
//! - Theme and dark-mode preferences are applied from effects so the DOM always mirrors state.

use crate::components::confirm::ConfirmOverlay;
use crate::components::shell::AppShell;
use crate::components::widgets::{ToastHost, install_widgets};
use crate::core::confirm::ConfirmService;
use crate::core::store::AppStore;
use crate::core::tabs::AppTab;
use crate::core::toasts::Notice;
use crate::core::tone::ToastTone;
use crate::features::catalog::actions::{CatalogAction, refresh};
use crate::features::catalog::error::CatalogResult;
use crate::features::catalog::logic::export_rows;
use crate::features::catalog::view::{CatalogPanel, spawn_action};
use crate::features::gallery::view::WidgetGallery;
use crate::features::theme::view::ThemeEditor;
use gloo::console;
use nousui_catalog::{ComponentRecord, ComponentStore, IndexedDbStore};
use nousui_config::{BrowserStorage, DarkModePreference, ThemeStore, ThemeTokens};
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod preferences;

/// Long-lived handles shared by every view.
#[derive(Clone)]
pub(crate) struct AppServices {
    pub(crate) store: Rc<dyn ComponentStore>,
    pub(crate) confirm: ConfirmService,
}

impl AppServices {
    fn new() -> Self {
        Self {
            store: Rc::new(IndexedDbStore::new()),
            confirm: ConfirmService::new(),
        }
    }
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.confirm == other.confirm
    }
}

async fn boot(services: &AppServices) -> CatalogResult<Vec<ComponentRecord>> {
    services.store.open().await?;
    refresh(services.store.as_ref()).await
}

fn push_notice(dispatch: &Dispatch<AppStore>, notice: Notice) {
    dispatch.reduce_mut(|store| {
        store.toasts.push(notice);
    });
}

#[function_component(NousApp)]
fn nous_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let services = use_memo(|_| AppServices::new(), ());
    let tab = use_state(AppTab::default);
    let tokens = use_state(|| ThemeStore::new(BrowserStorage).load());
    let dark = use_state(|| DarkModePreference::load(&BrowserStorage));
    let toasts = use_selector(|store: &AppStore| store.toasts.entries().to_vec());

    {
        let services = (*services).clone();
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                install_widgets();
                spawn_local(async move {
                    match boot(&services).await {
                        Ok(rows) => dispatch.reduce_mut(|store| store.apply_refresh(rows, None)),
                        Err(err) => {
                            console::error!(format!("startup failed: {err}"));
                            push_notice(
                                &dispatch,
                                Notice::new(ToastTone::Danger, format!("Failed to start: {err}")),
                            );
                        }
                    }
                });
                || ()
            },
            (),
        );
    }
    use_effect_with_deps(
        |tokens: &ThemeTokens| {
            preferences::apply_theme(tokens);
            || ()
        },
        (*tokens).clone(),
    );
    use_effect_with_deps(
        |dark: &DarkModePreference| {
            preferences::apply_dark_mode(*dark);
            || ()
        },
        *dark,
    );

    let on_select = {
        let tab = tab.clone();
        Callback::from(move |next: AppTab| tab.set(next))
    };
    let on_toggle_dark = {
        let dark = dark.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |()| match dark.toggle(&BrowserStorage) {
            Ok(next) => dark.set(next),
            Err(err) => {
                console::error!(format!("dark mode not saved: {err}"));
                dark.set(DarkModePreference::new(!dark.enabled()));
                push_notice(&dispatch, Notice::new(ToastTone::Error, err.to_string()));
            }
        })
    };
    let on_new = {
        let tab = tab.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            tab.set(AppTab::Catalog);
            dispatch.reduce_mut(|store| store.catalog.form_open = true);
        })
    };
    let on_export = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            let rows = dispatch.get().catalog.rows().to_vec();
            #[allow(clippy::cast_possible_truncation)]
            let now = js_sys::Date::now() as i64;
            let notice = match export_rows(&rows, now) {
                Ok(file) => match preferences::download(&file) {
                    Ok(()) => Notice::new(ToastTone::Info, "JSON file exported"),
                    Err(detail) => {
                        console::error!(format!("export download failed: {detail}"));
                        Notice::new(ToastTone::Error, format!("Export failed: {detail}"))
                    }
                },
                Err(err) => {
                    console::error!(format!("export failed: {err}"));
                    err.notice()
                }
            };
            push_notice(&dispatch, notice);
        })
    };
    let on_reset = {
        let services = (*services).clone();
        let dispatch = dispatch.clone();
        Callback::from(move |()| spawn_action(&services, &dispatch, CatalogAction::Reset))
    };
    let on_save_theme = {
        let tokens = tokens.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |next: ThemeTokens| {
            let notice = match ThemeStore::new(BrowserStorage).save(&next) {
                Ok(()) => Notice::new(ToastTone::Success, "Theme saved"),
                Err(err) => {
                    console::error!(format!("theme not saved: {err}"));
                    Notice::new(ToastTone::Error, err.to_string())
                }
            };
            tokens.set(next);
            push_notice(&dispatch, notice);
        })
    };
    let on_reset_theme = {
        let tokens = tokens.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            let notice = match ThemeStore::new(BrowserStorage).reset() {
                Ok(defaults) => {
                    tokens.set(defaults);
                    Notice::new(ToastTone::Info, "Theme restored to defaults")
                }
                Err(err) => {
                    console::error!(format!("theme not reset: {err}"));
                    Notice::new(ToastTone::Error, err.to_string())
                }
            };
            push_notice(&dispatch, notice);
        })
    };
    let on_fade = dispatch.reduce_mut_callback_with(|store, id: u64| {
        store.toasts.begin_fade(id);
    });
    let on_remove = dispatch.reduce_mut_callback_with(|store, id: u64| {
        store.toasts.remove(id);
    });

    let panel = match *tab {
        AppTab::Catalog => html! { <CatalogPanel services={(*services).clone()} /> },
        AppTab::Widgets => html! { <WidgetGallery /> },
        AppTab::Theme => html! {
            <ThemeEditor tokens={(*tokens).clone()} on_save={on_save_theme} on_reset={on_reset_theme} />
        },
    };

    html! {
        <>
            <AppShell
                active={*tab}
                on_select={on_select}
                dark={dark.enabled()}
                on_toggle_dark={on_toggle_dark}
                on_new={on_new}
                on_export={on_export}
                on_reset={on_reset}
            >
                {panel}
            </AppShell>
            <ToastHost toasts={(*toasts).clone()} on_fade={on_fade} on_remove={on_remove} />
            <ConfirmOverlay service={services.confirm.clone()} />
        </>
    }
}

/// Mount the application on `#root`, or on `<body>` when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<NousApp>::with_root(root).render();
    } else {
        yew::Renderer::<NousApp>::new().render();
    }
}
