use std::path::PathBuf;

use anyhow::Result;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    /// Directory holding config, state and the log file.
    pub config_dir: Option<PathBuf>,
    /// Overrides the base URL from `config.json`.
    pub base_url: Option<String>,
}

pub fn run() -> Result<()> {
    crate::tui_shell::run_with_options(TuiRunOptions::default())
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
