//! Navigation to the configured target after a granted verdict.

use std::process::{Command, ExitStatus};

/// Errors that can occur when launching the navigation target.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("No opener available on this platform")]
    NoOpener,

    #[error("Failed to launch '{tool}': {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("'{tool}' exited with {status}")]
    Failed { tool: &'static str, status: ExitStatus },
}

/// The platform opener command, if one exists.
fn opener() -> Option<(&'static str, &'static [&'static str])> {
    #[cfg(target_os = "macos")]
    {
        Some(("open", &[]))
    }

    #[cfg(target_os = "linux")]
    {
        Some(("xdg-open", &[]))
    }

    #[cfg(target_os = "windows")]
    {
        Some(("cmd", &["/C", "start", ""]))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

/// Open `target` (a URL or file path) with the platform opener.
///
/// One navigation method only; callers run this after the terminal has
/// been restored so the opener does not fight the alternate screen.
pub fn navigate(target: &str) -> Result<(), NavigationError> {
    let (tool, args) = opener().ok_or(NavigationError::NoOpener)?;
    tracing::debug!(target, tool, "navigating to target");

    let status = Command::new(tool)
        .args(args)
        .arg(target)
        .status()
        .map_err(|source| NavigationError::Spawn { tool, source })?;

    if !status.success() {
        return Err(NavigationError::Failed { tool, status });
    }
    Ok(())
}
