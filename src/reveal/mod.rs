//! Character-reveal animation engine
//!
//! Reveals a target string left-to-right, one character per tick, showing
//! random filler glyphs for the positions that have not been reached yet.
//!
//! The engine is a plain state machine with no timing of its own: a driver
//! (normally [`crate::sequence::Sequence`]) calls [`Reveal::tick`] on its
//! schedule and writes the produced frame to an output slot. Randomness is
//! injected through a [`rand::Rng`] so tests can use a seeded generator.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use termgate::reveal::{Reveal, RevealTick};
//!
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(7);
//! let mut reveal = Reveal::new("OK").expect("non-empty target");
//!
//! while let Some(tick) = reveal.tick(&mut rng) {
//!     match tick {
//!         RevealTick::Frame(text) => assert_eq!(text.len(), 2),
//!         RevealTick::Complete(text) => assert_eq!(text, "OK"),
//!     }
//! }
//! ```

mod engine;
pub mod glyphs;

pub use engine::{Reveal, RevealTick};
