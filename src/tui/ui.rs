//! Rendering for the gate screen
//!
//! Draws the boot log, the message area and the passphrase prompt into a
//! centered column. Panels are re-rendered whole from the line buffers
//! the sequencer writes into.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

use super::app::{GateApp, Stage};
use super::theme::current_theme;
use crate::gate::messages;

/// Prompt marker shown in front of the passphrase input.
const PROMPT: &str = "> ";
/// Block cursor shown at the end of the input.
const CURSOR: &str = "\u{2588}";

/// Render the whole gate screen.
pub(crate) fn render(frame: &mut Frame, app: &GateApp) {
    let theme = current_theme();
    let area = centered_rect(80, 90, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(messages::BOOT_SEQUENCE.len() as u16),
            Constraint::Length(1),
            Constraint::Length(messages::ACCESS_GRANTED.len() as u16 + 1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    // Boot log
    let boot: Vec<Line> = app
        .boot_lines
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();
    frame.render_widget(Paragraph::new(boot).style(theme.text_style()), chunks[0]);

    // Message area: denial in the error color, granted in the success color
    let msg_style = match app.stage {
        Stage::Denying => theme.error_style(),
        Stage::Granting | Stage::Redirecting { .. } => theme.success_style(),
        _ => theme.text_style(),
    };
    let msg: Vec<Line> = app
        .msg_lines
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();
    frame.render_widget(Paragraph::new(msg).style(msg_style), chunks[2]);

    // Prompt + input
    if app.show_input() {
        let avail = (chunks[4].width as usize).saturating_sub(PROMPT.len() + 1);
        let shown = visible_tail(&app.input, avail);
        let line = Line::from(vec![
            Span::styled(PROMPT, theme.accent_bold_style()),
            Span::styled(shown, theme.text_style()),
            Span::styled(CURSOR, theme.accent_style()),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[4]);
    }
}

/// Create a centered layout with the given percentage constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}

/// The widest suffix of `input` that fits in `max_width` columns, so a
/// long attempt scrolls instead of overflowing the line.
fn visible_tail(input: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = input.len();
    for (idx, ch) in input.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &input[start..]
}
