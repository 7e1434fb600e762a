//! The reveal state machine.

use rand::Rng;

use super::glyphs;

/// One step of a reveal animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealTick {
    /// An intermediate frame: revealed prefix plus random filler.
    Frame(String),
    /// The final frame, equal to the target text. Produced exactly once.
    Complete(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Complete,
    Cancelled,
}

/// Progressive left-to-right reveal of a single target string.
///
/// For a target of `n` characters the engine produces exactly `n + 1`
/// frames, each of length `n`: the first with nothing revealed, then one
/// more revealed character per tick. The revealed count never decreases,
/// and the last frame is the target text itself, delivered as
/// [`RevealTick::Complete`].
///
/// A reveal is single-use: once complete or cancelled it produces nothing.
#[derive(Debug, Clone)]
pub struct Reveal {
    target: Vec<char>,
    revealed: usize,
    state: State,
}

impl Reveal {
    /// Create a reveal for `target`.
    ///
    /// Returns `None` for an empty target: degenerate input is a silent
    /// skip, with no frames and no completion.
    pub fn new(target: &str) -> Option<Self> {
        if target.is_empty() {
            return None;
        }
        Some(Self {
            target: target.chars().collect(),
            revealed: 0,
            state: State::Running,
        })
    }

    /// Produce the next frame, or `None` once the reveal is over.
    ///
    /// The completion frame is reported once; every call after that
    /// returns `None`.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Option<RevealTick> {
        if self.state != State::Running {
            return None;
        }

        let frame: String = self
            .target
            .iter()
            .enumerate()
            .map(|(i, &ch)| {
                if i < self.revealed {
                    ch
                } else {
                    glyphs::random_glyph(rng)
                }
            })
            .collect();

        if self.revealed == self.target.len() {
            // Everything revealed: the frame equals the target exactly.
            self.state = State::Complete;
            tracing::trace!(text = %frame, "reveal complete");
            return Some(RevealTick::Complete(frame));
        }

        self.revealed += 1;
        Some(RevealTick::Frame(frame))
    }

    /// Stop the reveal before it completes, suppressing the completion
    /// frame permanently. Safe to call any number of times; a reveal that
    /// already completed stays complete.
    pub fn cancel(&mut self) {
        if self.state == State::Running {
            self.state = State::Cancelled;
            tracing::trace!(revealed = self.revealed, "reveal cancelled");
        }
    }

    /// Number of characters revealed so far.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Length of the target text in characters.
    pub fn len(&self) -> usize {
        self.target.len()
    }

    /// Always false: empty targets are rejected by [`Reveal::new`].
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Whether the completion frame has been produced.
    pub fn is_complete(&self) -> bool {
        self.state == State::Complete
    }

    /// Whether the reveal was cancelled before completing.
    pub fn is_cancelled(&self) -> bool {
        self.state == State::Cancelled
    }
}
