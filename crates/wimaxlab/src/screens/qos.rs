//! QoS class analyzer screen.
//!
//! Selecting one of the four service classes shows its description and the
//! fixed five-entry qualitative rating table. Nothing is computed here.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use wimaxlab_core::QosClass;

use crate::components::{Component, EventResult};
use crate::screens::Screen;
use crate::state::AppState;
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, focused_block};

pub struct QosScreen;

impl QosScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for QosScreen {
    fn title(&self) -> &str {
        "QoS Class Analyzer"
    }
}

impl Component for QosScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                state.controls.cycle_qos(false);
                EventResult::Handled
            }
            KeyCode::Right | KeyCode::Char('l') => {
                state.controls.cycle_qos(true);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = focused_block(self.title(), false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // class selector
                Constraint::Length(1), // spacer
                Constraint::Length(1), // description
                Constraint::Length(1), // spacer
                Constraint::Min(0),    // rating table
            ])
            .split(inner);

        let selected = state.controls.qos_class;

        let mut selector = vec![Span::raw("  Service Class: ")];
        for class in QosClass::ALL {
            let style = if class == selected {
                Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            selector.push(Span::styled(format!("[{}] ", class.name()), style));
        }
        frame.render_widget(Paragraph::new(Line::from(selector)), chunks[0]);

        let description = Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(Color::Green)),
            Span::raw(selected.description()),
        ]);
        frame.render_widget(Paragraph::new(description), chunks[2]);

        let mut rows = vec![Line::from(Span::styled(
            "  Expected characteristics:",
            Style::default().fg(HELP_COLOR),
        ))];
        for (label, value) in selected.ratings().rows() {
            rows.push(Line::from(vec![
                Span::styled(
                    format!("    {:<12}", label),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(value, Style::default().fg(Color::White)),
            ]));
        }
        frame.render_widget(Paragraph::new(rows), chunks[4]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_class_cycles_through_all_four() {
        let mut screen = QosScreen::new();
        let mut state = AppState::new(Some(42)).unwrap();

        let mut seen = vec![state.controls.qos_class];
        for _ in 0..3 {
            screen.handle_key(key(KeyCode::Right), &mut state);
            seen.push(state.controls.qos_class);
        }
        assert_eq!(seen, QosClass::ALL.to_vec());

        screen.handle_key(key(KeyCode::Right), &mut state);
        assert_eq!(state.controls.qos_class, QosClass::Ugs);
    }
}
