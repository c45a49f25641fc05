pub mod logging;
pub mod model;
pub mod notify;
pub mod panel;
pub mod remote;
pub mod session;
pub mod store;
pub mod text;
pub mod tui;

mod tui_shell;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod testing;
