//! Keyboard input handling for the gate screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::GateApp;

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running.
    Continue,
    /// Exit the gate screen.
    Quit,
}

/// Handle a key event.
///
/// Printable keys type into the passphrase field, Enter submits,
/// Backspace deletes, Esc or Ctrl-C quits. Everything else is ignored.
pub fn handle_key(key: KeyEvent, app: &mut GateApp) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Submit ===
        KeyCode::Enter => {
            app.submit_attempt();
            InputResult::Continue
        }

        // === Editing ===
        KeyCode::Backspace => {
            if app.input.pop().is_some() {
                app.needs_render = true;
            }
            InputResult::Continue
        }
        KeyCode::Char(ch)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            if app.input_visible {
                app.input.push(ch);
                app.needs_render = true;
            }
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
