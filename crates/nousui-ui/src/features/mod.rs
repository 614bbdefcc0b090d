//! Feature slices: state and logic compile everywhere, views only for wasm.
pub mod catalog;
#[cfg(target_arch = "wasm32")]
pub(crate) mod gallery;
pub mod searchable_select;
#[cfg(target_arch = "wasm32")]
pub(crate) mod theme;
