use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the config directory, base URL and whether a key is stored
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Persist the base URL of the template service
    SetUrl { url: String },
}
