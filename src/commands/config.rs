//! Config subcommands handler

use std::path::{Path, PathBuf};

use anyhow::Result;

use termgate::tui::current_theme;
use termgate::Config;

use super::load_config;

/// Resolve the config file location (explicit path or platform default).
fn resolve_path(override_path: Option<&Path>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}

/// Show the effective configuration as TOML.
pub fn handle_show(override_path: Option<&Path>) -> Result<()> {
    let config = load_config(override_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the config file location.
pub fn handle_path(override_path: Option<&Path>) -> Result<()> {
    let path = resolve_path(override_path)?;
    println!("{}", path.display());
    Ok(())
}

/// Open the configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi'). The file is
/// created with defaults first if it does not exist.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(override_path: Option<&Path>) -> Result<()> {
    let path = resolve_path(override_path)?;
    let theme = current_theme();

    // Ensure config exists
    if !path.exists() {
        Config::default().save_to(&path)?;
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!("Opening {} with {}", path.display(), editor))
    );

    std::process::Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}
