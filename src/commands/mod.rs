//! Command handlers for the termgate CLI.

pub mod completions;
pub mod config;
pub mod run;

use std::path::Path;

use anyhow::Result;
use termgate::Config;

/// Load the configuration, honoring an explicit `--config` path.
pub fn load_config(override_path: Option<&Path>) -> Result<Config> {
    let config = match override_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
