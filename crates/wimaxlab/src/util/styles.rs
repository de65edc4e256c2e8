//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused elements
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headline metric values
pub const METRIC_COLOR: Color = Color::Cyan;

/// Create a block with a title that shows focused state via border color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}
