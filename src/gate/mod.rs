//! The access gate
//!
//! Owns the passphrase check and the "animation running" guard that keeps
//! keyboard submissions from overlapping a playing sequence. This is a
//! themed toy, not an access-control system: the passphrase is a plain
//! string comparison against a config value, with nothing hashed, stored
//! or transmitted.
//!
//! The gate itself never touches the screen. The TUI asks it for a
//! [`Verdict`] and plays the matching message sequence; navigation on a
//! granted verdict goes through [`navigate`].

pub mod messages;
mod navigate;

pub use navigate::{navigate, NavigationError};

use rand::Rng;

/// Outcome of a passphrase submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The attempt matched; play the granted sequence and navigate.
    Granted,
    /// The attempt did not match; play this denial message.
    Denied(&'static str),
    /// Nothing to do: empty attempt, or an animation is still running.
    Ignored,
}

/// Gate state: the configured passphrase and the re-entrancy guard.
///
/// One instance is constructed at startup and threaded through the TUI;
/// there is no module-level state.
#[derive(Debug)]
pub struct Gate {
    passphrase: String,
    animating: bool,
}

impl Gate {
    /// Create a gate for the configured passphrase.
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
            animating: false,
        }
    }

    /// Plain string-equality check against the configured passphrase.
    pub fn verify(&self, attempt: &str) -> bool {
        attempt == self.passphrase
    }

    /// Judge a submission.
    ///
    /// The attempt is trimmed first; an empty result is [`Verdict::Ignored`],
    /// as is any submission while an animation is running. A non-ignored
    /// verdict sets the animation guard - the caller must report the end of
    /// the resulting sequence via [`animation_finished`](Gate::animation_finished).
    pub fn submit<R: Rng>(&mut self, attempt: &str, rng: &mut R) -> Verdict {
        let attempt = attempt.trim();
        if attempt.is_empty() {
            return Verdict::Ignored;
        }
        if self.animating {
            tracing::debug!("submission ignored while a sequence is running");
            return Verdict::Ignored;
        }

        self.animating = true;
        if self.verify(attempt) {
            tracing::debug!("access granted");
            Verdict::Granted
        } else {
            let denial = messages::ACCESS_DENIED[rng.gen_range(0..messages::ACCESS_DENIED.len())];
            tracing::debug!(message = denial, "access denied");
            Verdict::Denied(denial)
        }
    }

    /// Mark the start of a top-level sequence (used for the boot log,
    /// which plays before any submission).
    pub fn begin_animation(&mut self) {
        self.animating = true;
    }

    /// Clear the animation guard once the running sequence reported its
    /// completion.
    pub fn animation_finished(&mut self) {
        self.animating = false;
    }

    /// Whether a sequence is currently running.
    pub fn is_animating(&self) -> bool {
        self.animating
    }
}
