//! Core, DOM-free primitives shared by the widgets and features.
pub mod confirm;
pub mod latest;
pub mod registry;
pub mod store;
pub mod styles;
pub mod tabs;
pub mod toasts;
pub mod tone;
