pub(super) mod form;
pub(super) mod notices;
pub(super) mod templates;

pub(in crate::tui_shell) use form::render_form;
pub(in crate::tui_shell) use notices::{notices_height, render_notices};
pub(in crate::tui_shell) use templates::render_templates;
