//! Shell completion generation.

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use termgate::cli::Cli;

/// Emit completions for `shell` on stdout.
pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "termgate", &mut io::stdout());
    Ok(())
}
