//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store so async tasks can update it through a `Dispatch`.
//! - Slices stay small; reducers live next to the slice they touch.

use crate::core::toasts::{Notice, ToastQueue};
use crate::features::catalog::state::CatalogState;
use nousui_catalog::ComponentRecord;
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Component catalog rows and filters.
    pub catalog: CatalogState,
    /// Active toasts.
    pub toasts: ToastQueue,
}

impl AppStore {
    /// Replace the row cache and surface `notice`.
    pub fn apply_refresh(&mut self, rows: Vec<ComponentRecord>, notice: Option<Notice>) {
        self.catalog.set_rows(rows);
        if let Some(notice) = notice {
            self.toasts.push(notice);
        }
    }
}
