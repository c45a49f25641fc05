use std::path::PathBuf;

use clap::Subcommand;

use template_admin::model::TemplateId;

mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

pub(crate) use cli_subcommands::ConfigCommands;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Store the API key used for every request
    Login {
        #[arg(long)]
        api_key: String,
    },

    /// Show or change client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// List templates
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one template, including its HTML content
    Show {
        id: TemplateId,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a template
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, conflicts_with = "html_file")]
        html: Option<String>,
        /// Read the HTML content from a file
        #[arg(long, value_name = "PATH")]
        html_file: Option<PathBuf>,
    },

    /// Update a template; omitted fields keep their current value
    Update {
        id: TemplateId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, conflicts_with = "html_file")]
        html: Option<String>,
        /// Read the HTML content from a file
        #[arg(long, value_name = "PATH")]
        html_file: Option<PathBuf>,
    },

    /// Delete a template
    Delete {
        id: TemplateId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
