//! Widget gallery tab.
pub(crate) mod view;
