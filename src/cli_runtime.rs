use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use template_admin::remote::RemoteClient;
use template_admin::store::LocalStore;

use crate::Commands;

#[derive(Parser)]
#[command(name = "template-admin")]
#[command(about = "Manage HTML templates on a remote template service", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding config.json, state.json and the TUI log
    #[arg(long, value_name = "PATH", env = "TEMPLATE_ADMIN_HOME", global = true)]
    config_dir: Option<PathBuf>,

    /// Base URL of the template API (overrides config.json)
    #[arg(long, value_name = "URL", env = "TEMPLATE_ADMIN_URL", global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) struct CliEnv {
    pub(crate) store: LocalStore,
    pub(crate) base_url: Option<String>,
}

impl CliEnv {
    /// Client for the base URL in effect: flag or env, then config.json.
    pub(crate) fn client(&self) -> Result<RemoteClient> {
        let base_url = match &self.base_url {
            Some(url) => url.clone(),
            None => self.store.read_config()?.effective_base_url().to_string(),
        };
        RemoteClient::new(&base_url)
    }
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            template_admin::tui::run_with_options(template_admin::tui::TuiRunOptions {
                config_dir: cli.config_dir,
                base_url: cli.base_url,
            })?;
        }
        Some(command) => {
            template_admin::logging::init_stderr();
            let dir = match cli.config_dir {
                Some(dir) => dir,
                None => LocalStore::default_dir()?,
            };
            let store = LocalStore::open(&dir)
                .with_context(|| format!("open config dir {}", dir.display()))?;
            let ctx = CliEnv {
                store,
                base_url: cli.base_url,
            };
            crate::cli_exec::handle_command(&ctx, command)?
        }
    }

    Ok(())
}
