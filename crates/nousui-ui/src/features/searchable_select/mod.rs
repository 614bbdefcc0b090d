//! Searchable dropdown layered over a native `<select>`.
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
