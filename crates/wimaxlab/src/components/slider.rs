//! Bounded slider rows for the dashboard controls.
//!
//! Each control renders as one row: label, a fixed-width track showing the
//! value's position within its bounds, and the formatted value. Focus is shown
//! with the standard focus color; adjustment keys are handled by the owning
//! screen, not here.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::util::styles::FOCUS_COLOR;

/// Width of the slider track in cells.
const TRACK_WIDTH: usize = 24;

/// Position of `value` within `[min, max]` as a ratio in `[0, 1]`.
pub fn track_ratio(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// One slider row ready to render.
pub struct SliderRow<'a> {
    label: &'a str,
    value_text: String,
    ratio: f64,
    focused: bool,
}

impl<'a> SliderRow<'a> {
    pub fn new(label: &'a str, value_text: String, value: f64, min: f64, max: f64) -> Self {
        Self {
            label,
            value_text,
            ratio: track_ratio(value, min, max),
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let filled = (self.ratio * TRACK_WIDTH as f64).round() as usize;
        let filled = filled.min(TRACK_WIDTH);

        let track_style = if self.focused {
            Style::default().fg(FOCUS_COLOR)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let label_style = if self.focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let marker = if self.focused { "❯ " } else { "  " };

        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(FOCUS_COLOR)),
            Span::styled(format!("{:<22}", self.label), label_style),
            Span::styled("█".repeat(filled), track_style),
            Span::styled(
                "░".repeat(TRACK_WIDTH - filled),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(" "),
            Span::styled(self.value_text.clone(), Style::default().fg(Color::White)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_ratio_bounds() {
        assert_eq!(track_ratio(2.3, 2.3, 3.5), 0.0);
        assert_eq!(track_ratio(3.5, 2.3, 3.5), 1.0);
        assert!((track_ratio(2.9, 2.3, 3.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_track_ratio_clamps_out_of_range() {
        assert_eq!(track_ratio(-10.0, 0.0, 1.0), 0.0);
        assert_eq!(track_ratio(10.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(track_ratio(5.0, 5.0, 5.0), 0.0);
    }
}
