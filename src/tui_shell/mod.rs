use anyhow::Result;

mod app;

mod input;
mod modal;
mod view;
mod views;

pub fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
