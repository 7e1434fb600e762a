//! Default command: run the gate screen.

use std::path::Path;

use anyhow::Result;

use termgate::gate::navigate;
use termgate::tui::{set_theme, AppOutcome, GateApp, Theme};

use super::load_config;

/// Launch the gate TUI; on a granted verdict, open the configured
/// target once the terminal has been restored.
#[cfg(not(tarpaulin_include))]
pub fn handle_run(config_path: Option<&Path>, seed: Option<u64>) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        anyhow::bail!("termgate needs an interactive terminal (stdout is not a tty)");
    }

    let config = load_config(config_path)?;
    set_theme(Theme::from_name(&config.theme).unwrap_or_default());

    let target = config.gate.target.clone();
    let mut app = GateApp::new(config, seed);

    match app.run()? {
        AppOutcome::Granted => {
            navigate(&target)?;
            Ok(())
        }
        AppOutcome::Quit => Ok(()),
    }
}
