//! termgate - a terminal access-gate effect
//!
//! Plays a scripted boot-log animation that reveals each line through
//! random filler glyphs, then prompts for a demo passphrase. A correct
//! attempt plays the "access granted" sequence and opens a configured
//! destination; a wrong one reveals a random denial message.
//!
//! This is a visual effect in the style of movie hacking scenes, not an
//! authentication system: the passphrase is a plaintext comparison with a
//! config value.
//!
//! # Architecture
//!
//! - [`reveal`]: single-line character-reveal engine
//! - [`sequence`]: ordered multi-line runner driving one reveal at a time
//! - [`gate`]: passphrase verdicts, message sets and navigation
//! - [`tui`]: the ratatui front end tying it all together
//! - [`config`]: TOML configuration with defaults
//! - [`cli`]: clap command definitions (shared with `xtask` for man pages)

pub mod cli;
pub mod config;
pub mod gate;
pub mod reveal;
pub mod sequence;
pub mod tui;

pub use config::Config;
pub use gate::{Gate, Verdict};
pub use reveal::{Reveal, RevealTick};
pub use sequence::{LinePanel, Sequence, SequenceTick};

/// Version string for `--version`: crate version, git SHA (dev builds)
/// and build date.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let date = env!("TERMGATE_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => {
            let short = &sha[..sha.len().min(7)];
            format!("{version} ({short} {date})")
        }
        None => format!("{version} ({date})"),
    }
}
