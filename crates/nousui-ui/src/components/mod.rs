pub(crate) mod confirm;
pub(crate) mod empty_state;
pub(crate) mod shell;
pub(crate) mod widgets;
