//! The sequence state machine.

use std::mem;
use std::time::{Duration, Instant};

use rand::Rng;

use super::panel::LinePanel;
use crate::reveal::{Reveal, RevealTick};

/// Result of advancing a sequence by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceTick {
    /// Nothing was due at the given instant.
    Waiting,
    /// A frame was written to the panel; the display needs a redraw.
    Updated,
    /// The last line finished and its post-delay elapsed. Reported once.
    Finished,
    /// The sequence already finished or was cancelled.
    Done,
}

#[derive(Debug)]
enum Phase {
    /// Not started yet; the first tick begins line 0 (or finishes an
    /// empty sequence).
    Idle,
    /// A line is actively revealing.
    Revealing {
        index: usize,
        slot: usize,
        reveal: Reveal,
        next_tick: Instant,
    },
    /// Waiting out the pause after a completed line.
    LineDelay { next_index: usize, until: Instant },
    /// Terminal: finished or cancelled.
    Done,
}

/// Ordered multi-line reveal runner.
///
/// Drives one [`Reveal`] at a time over a list of lines, inserting
/// `line_delay` between the completion of one line and the start of the
/// next. The driver calls [`tick`](Sequence::tick) whenever its scheduler
/// wakes; [`next_deadline`](Sequence::next_deadline) tells it when the
/// next wake is due.
#[derive(Debug)]
pub struct Sequence {
    lines: Vec<String>,
    tick_interval: Duration,
    line_delay: Duration,
    phase: Phase,
}

impl Sequence {
    /// Create a runner over `lines`.
    ///
    /// `tick_interval` is the per-character pacing; `line_delay` is the
    /// pause after each completed line (including the last one, before
    /// the sequence reports [`SequenceTick::Finished`]).
    pub fn new(lines: Vec<String>, tick_interval: Duration, line_delay: Duration) -> Self {
        Self {
            lines,
            tick_interval,
            line_delay,
            phase: Phase::Idle,
        }
    }

    /// Runner for a single line with no post-delay, used for the denial
    /// message reveal.
    pub fn single(line: impl Into<String>, tick_interval: Duration) -> Self {
        Self::new(vec![line.into()], tick_interval, Duration::ZERO)
    }

    /// Advance the sequence to `now`.
    ///
    /// At most one animation step is taken per call; drivers wake at
    /// [`next_deadline`](Sequence::next_deadline) and call this until it
    /// returns [`SequenceTick::Waiting`] or a terminal value.
    pub fn tick<R: Rng, P: LinePanel>(
        &mut self,
        now: Instant,
        rng: &mut R,
        panel: &mut P,
    ) -> SequenceTick {
        let phase = mem::replace(&mut self.phase, Phase::Done);
        match phase {
            Phase::Idle => {
                if self.lines.is_empty() {
                    // No slots, no ticks: finish immediately.
                    tracing::debug!("empty sequence finished");
                    return SequenceTick::Finished;
                }
                self.begin_line(0, now, rng, panel);
                SequenceTick::Updated
            }

            Phase::Revealing {
                index,
                slot,
                mut reveal,
                next_tick,
            } => {
                if now < next_tick {
                    self.phase = Phase::Revealing {
                        index,
                        slot,
                        reveal,
                        next_tick,
                    };
                    return SequenceTick::Waiting;
                }

                match reveal.tick(rng) {
                    Some(RevealTick::Frame(text)) => {
                        panel.set_line(slot, &text);
                        self.phase = Phase::Revealing {
                            index,
                            slot,
                            reveal,
                            next_tick: now + self.tick_interval,
                        };
                        SequenceTick::Updated
                    }
                    Some(RevealTick::Complete(text)) => {
                        panel.set_line(slot, &text);
                        tracing::debug!(line = index, "line reveal complete");
                        self.phase = Phase::LineDelay {
                            next_index: index + 1,
                            until: now + self.line_delay,
                        };
                        SequenceTick::Updated
                    }
                    // A reveal inside a sequence is never cancelled from
                    // outside; a spent reveal here means the phase is stale.
                    None => SequenceTick::Done,
                }
            }

            Phase::LineDelay { next_index, until } => {
                if now < until {
                    self.phase = Phase::LineDelay { next_index, until };
                    return SequenceTick::Waiting;
                }
                if next_index < self.lines.len() {
                    self.begin_line(next_index, now, rng, panel);
                    SequenceTick::Updated
                } else {
                    tracing::debug!(lines = self.lines.len(), "sequence finished");
                    SequenceTick::Finished
                }
            }

            Phase::Done => SequenceTick::Done,
        }
    }

    /// Allocate the slot for line `index` and write its first frame.
    fn begin_line<R: Rng, P: LinePanel>(
        &mut self,
        index: usize,
        now: Instant,
        rng: &mut R,
        panel: &mut P,
    ) {
        let slot = panel.push_line();
        match Reveal::new(&self.lines[index]) {
            Some(mut reveal) => match reveal.tick(rng) {
                Some(RevealTick::Frame(text)) => {
                    panel.set_line(slot, &text);
                    self.phase = Phase::Revealing {
                        index,
                        slot,
                        reveal,
                        next_tick: now + self.tick_interval,
                    };
                }
                Some(RevealTick::Complete(text)) => {
                    panel.set_line(slot, &text);
                    self.phase = Phase::LineDelay {
                        next_index: index + 1,
                        until: now + self.line_delay,
                    };
                }
                None => {
                    self.phase = Phase::LineDelay {
                        next_index: index + 1,
                        until: now,
                    };
                }
            },
            None => {
                // An empty line produces no frames and no completion, so
                // waiting on it would stall the run forever. Keep the slot
                // for layout and move straight on.
                panel.set_line(slot, "");
                self.phase = Phase::LineDelay {
                    next_index: index + 1,
                    until: now,
                };
            }
        }
    }

    /// Cancel the sequence: stops the active reveal, halts progression
    /// and suppresses [`SequenceTick::Finished`] permanently. Idempotent.
    pub fn cancel(&mut self) {
        if let Phase::Revealing { reveal, .. } = &mut self.phase {
            reveal.cancel();
        }
        if !matches!(self.phase, Phase::Done) {
            tracing::debug!("sequence cancelled");
        }
        self.phase = Phase::Done;
    }

    /// Whether the sequence reached its terminal state (finished or
    /// cancelled).
    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    /// When the next animation step is due, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.phase {
            Phase::Revealing { next_tick, .. } => Some(*next_tick),
            Phase::LineDelay { until, .. } => Some(*until),
            Phase::Idle | Phase::Done => None,
        }
    }
}
