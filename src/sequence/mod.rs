//! Ordered multi-line reveal runner
//!
//! Plays a list of strings through the reveal engine, one line at a time,
//! with a configurable pause between the end of one line and the start of
//! the next. Lines are revealed strictly in input order; at most one
//! reveal is in flight at any instant.
//!
//! The runner is an explicit finite-state machine
//! (`Idle -> Revealing(i) -> LineDelay(i) -> Done`) advanced by a single
//! driver calling [`Sequence::tick`] with the current instant. Completion
//! is reported as [`SequenceTick::Finished`] exactly once, after the last
//! line's reveal completed and its own post-delay elapsed. An empty line
//! list finishes on the first tick without allocating any output slot.
//!
//! Output goes to a [`LinePanel`]: the runner allocates one child slot per
//! line and overwrites that slot's whole text on every animation tick.

mod panel;
mod runner;

pub use panel::LinePanel;
pub use runner::{Sequence, SequenceTick};
