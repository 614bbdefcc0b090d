//! Theme editor tab.
pub(crate) mod view;
