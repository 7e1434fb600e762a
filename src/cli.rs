//! Command-line interface definitions
//!
//! Kept in the library so `xtask` can generate man pages from the same
//! command tree the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Terminal access gate: boot-log reveal animation behind a demo
/// passphrase prompt.
#[derive(Debug, Parser)]
#[command(
    name = "termgate",
    version = Box::leak(crate::version_string().into_boxed_str()) as &'static str,
    about = "Scripted boot-log animation with a passphrase-gated redirect",
    long_about = "Plays a scrambled boot-log animation, prompts for a demo passphrase \
                  and opens the configured destination on success. The passphrase is a \
                  plaintext demo comparison, not real access control."
)]
pub struct Cli {
    /// Use an explicit config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed the glyph randomness (defaults to system entropy)
    #[arg(long, global = true, value_name = "SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show or edit the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Open the config file in $EDITOR, creating it if missing
    Edit,
}
