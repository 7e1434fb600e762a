//! termgate binary entry point.

mod commands;

use anyhow::Result;
use clap::Parser;

use termgate::cli::{Cli, Commands, ConfigAction};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => commands::run::handle_run(cli.config.as_deref(), cli.seed),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::handle_show(cli.config.as_deref()),
            ConfigAction::Path => commands::config::handle_path(cli.config.as_deref()),
            ConfigAction::Edit => commands::config::handle_edit(cli.config.as_deref()),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle_completions(shell),
    }
}
