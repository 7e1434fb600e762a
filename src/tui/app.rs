//! The gate application
//!
//! Owns all runtime state for the gate screen and drives the animation
//! sequences from a single-threaded event loop: poll for input with a
//! timeout derived from the next animation deadline, advance the active
//! sequence, redraw when something changed.
//!
//! At most one sequence runs at a time (boot log, denial reveal or
//! granted sequence), so reveals can never overlap.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::gate::{messages, Gate, Verdict};
use crate::sequence::{Sequence, SequenceTick};
use crate::tui::{input, ui};

/// How the gate session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppOutcome {
    /// The user quit (Esc or Ctrl-C); nothing to open.
    Quit,
    /// Access was granted and the redirect delay elapsed; the caller
    /// should navigate to the configured target.
    Granted,
}

/// What the screen is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    /// Boot log animating; submissions are ignored.
    Boot,
    /// Waiting for a passphrase.
    Prompt,
    /// Denial message animating; the input clears when it finishes.
    Denying,
    /// Granted sequence animating.
    Granting,
    /// Granted sequence done; waiting out the redirect delay.
    Redirecting { at: Instant },
}

/// Gate application state.
pub struct GateApp {
    pub(crate) config: Config,
    pub(crate) gate: Gate,
    pub(crate) rng: Pcg64,
    pub(crate) stage: Stage,
    /// Boot log panel, one entry per revealed line.
    pub(crate) boot_lines: Vec<String>,
    /// Message panel for denial/granted sequences.
    pub(crate) msg_lines: Vec<String>,
    /// Current passphrase attempt.
    pub(crate) input: String,
    /// False once access is granted and the field disappears.
    pub(crate) input_visible: bool,
    /// The one sequence in flight, if any.
    pub(crate) active_seq: Option<Sequence>,
    pub(crate) needs_render: bool,
}

impl GateApp {
    /// Create the application; `seed` fixes the glyph randomness.
    pub fn new(config: Config, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_entropy(),
        };
        let gate = Gate::new(config.gate.passphrase.clone());
        Self {
            config,
            gate,
            rng,
            stage: Stage::Boot,
            boot_lines: Vec::new(),
            msg_lines: Vec::new(),
            input: String::new(),
            input_visible: true,
            active_seq: None,
            needs_render: true,
        }
    }

    /// Begin the boot sequence. The gate's animation guard is set for
    /// the whole boot log, so early submissions are ignored.
    pub(crate) fn start(&mut self) {
        self.gate.begin_animation();
        self.stage = Stage::Boot;
        self.active_seq = Some(Sequence::new(
            messages::BOOT_SEQUENCE.iter().map(|s| s.to_string()).collect(),
            self.config.tick(),
            self.config.boot_delay(),
        ));
        self.needs_render = true;
    }

    /// Submit the current input to the gate and start the matching
    /// message sequence.
    pub(crate) fn submit_attempt(&mut self) {
        let attempt = self.input.clone();
        match self.gate.submit(&attempt, &mut self.rng) {
            Verdict::Ignored => {}
            Verdict::Granted => {
                self.input_visible = false;
                self.msg_lines.clear();
                self.active_seq = Some(Sequence::new(
                    messages::ACCESS_GRANTED.iter().map(|s| s.to_string()).collect(),
                    self.config.tick(),
                    self.config.access_delay(),
                ));
                self.stage = Stage::Granting;
                self.needs_render = true;
            }
            Verdict::Denied(denial) => {
                self.msg_lines.clear();
                self.active_seq = Some(Sequence::single(denial, self.config.tick()));
                self.stage = Stage::Denying;
                self.needs_render = true;
            }
        }
    }

    /// Advance the active sequence to `now`.
    pub(crate) fn advance(&mut self, now: Instant) {
        let Some(seq) = self.active_seq.as_mut() else {
            return;
        };
        let panel = match self.stage {
            Stage::Boot => &mut self.boot_lines,
            _ => &mut self.msg_lines,
        };
        match seq.tick(now, &mut self.rng, panel) {
            SequenceTick::Updated => self.needs_render = true,
            SequenceTick::Finished => {
                self.active_seq = None;
                self.on_sequence_finished(now);
                self.needs_render = true;
            }
            SequenceTick::Waiting | SequenceTick::Done => {}
        }
    }

    fn on_sequence_finished(&mut self, now: Instant) {
        match self.stage {
            Stage::Boot => {
                tracing::debug!("boot sequence finished, prompt ready");
                self.gate.animation_finished();
                self.stage = Stage::Prompt;
            }
            Stage::Denying => {
                // The field keeps its text until the denial reveal has
                // fully played, then resets for the next attempt.
                self.input.clear();
                self.gate.animation_finished();
                self.stage = Stage::Prompt;
            }
            Stage::Granting => {
                tracing::debug!("granted sequence finished, redirect scheduled");
                self.stage = Stage::Redirecting {
                    at: now + self.config.redirect_delay(),
                };
            }
            Stage::Prompt | Stage::Redirecting { .. } => {}
        }
    }

    /// Whether the input line should be drawn.
    pub(crate) fn show_input(&self) -> bool {
        self.input_visible && !matches!(self.stage, Stage::Boot)
    }

    /// Poll timeout until the next scheduled animation step.
    fn poll_timeout(&self, now: Instant) -> Duration {
        const IDLE: Duration = Duration::from_millis(250);

        if let Some(seq) = &self.active_seq {
            return match seq.next_deadline() {
                Some(at) => at.saturating_duration_since(now).min(IDLE),
                // Not started yet: tick right away.
                None => Duration::ZERO,
            };
        }
        if let Stage::Redirecting { at } = self.stage {
            return at.saturating_duration_since(now).min(IDLE);
        }
        IDLE
    }

    /// Run the gate screen until the user quits or access is granted.
    ///
    /// Enters raw mode and the alternate screen; both are restored on
    /// every exit path, after cancelling any in-flight reveal.
    #[cfg(not(tarpaulin_include))]
    pub fn run(&mut self) -> Result<AppOutcome> {
        let _guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        self.start();
        let outcome = self.event_loop(&mut terminal);

        // Teardown: never leave a reveal ticking against a dead screen.
        if let Some(seq) = self.active_seq.as_mut() {
            seq.cancel();
        }
        outcome
    }

    #[cfg(not(tarpaulin_include))]
    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<AppOutcome> {
        loop {
            if self.needs_render {
                terminal.draw(|frame| ui::render(frame, self))?;
                self.needs_render = false;
            }

            let timeout = self.poll_timeout(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if input::handle_key(key, self) == input::InputResult::Quit {
                            return Ok(AppOutcome::Quit);
                        }
                    }
                    Event::Resize(_, _) => self.needs_render = true,
                    _ => {}
                }
            }

            let now = Instant::now();
            self.advance(now);

            if let Stage::Redirecting { at } = self.stage {
                if now >= at {
                    return Ok(AppOutcome::Granted);
                }
            }
        }
    }
}

/// Raw-mode/alternate-screen guard; restores the terminal on drop so
/// panics and early returns cannot leave the shell unusable.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}
