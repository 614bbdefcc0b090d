//! Component catalog: rows, filters, controller operations and the table view.
pub mod actions;
pub mod error;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
