//! TUI (Text User Interface) module for the gate
//!
//! Renders the boot log, message area and passphrase prompt with
//! ratatui/crossterm and drives the animation sequences from a
//! single-threaded event loop.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::{AppOutcome, GateApp};
pub use theme::{current_theme, set_theme, Theme};
