//! Theme configuration for TUI and CLI
//!
//! Centralizes color and style definitions. Provides both ratatui styles
//! (for the gate screen) and ANSI escape codes (for CLI output).

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the gate screen.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (boot log lines)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for the prompt and cursor
    pub accent: Color,
    /// Denial message color
    pub error: Color,
    /// Granted message color
    pub success: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::phosphor()
    }
}

impl Theme {
    /// Phosphor theme - green-on-black CRT look.
    /// Uses standard ANSI colors for consistent terminal rendering.
    pub fn phosphor() -> Self {
        Self {
            text_primary: Color::Green,
            text_secondary: Color::DarkGray,
            accent: Color::LightGreen,
            error: Color::Red,
            success: Color::LightGreen,
            background: Color::Reset,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Look up a theme by its config name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "phosphor" => Some(Self::phosphor()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (the prompt marker).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for denial text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for granted text.
    pub fn success_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    // ANSI color helpers for CLI output

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ANSI_RESET)
    }
}

const ANSI_RESET: &str = "\x1b[0m";

/// Map a ratatui color to its ANSI foreground escape.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        _ => "",
    }
}

static ACTIVE_THEME: OnceLock<Theme> = OnceLock::new();

/// Install the process-wide theme; only the first call wins.
pub fn set_theme(theme: Theme) {
    let _ = ACTIVE_THEME.set(theme);
}

/// The process-wide theme, defaulting to phosphor.
pub fn current_theme() -> Theme {
    ACTIVE_THEME.get().cloned().unwrap_or_default()
}
