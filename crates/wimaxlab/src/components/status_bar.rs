use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text(state: &AppState) -> &'static str {
        match state.active_tab {
            TabId::Coverage | TabId::Spectral => {
                "1-6: switch tabs | j/k: select control | h/l: adjust | q: quit"
            }
            TabId::Qos => "1-6: switch tabs | h/l: change class | q: quit",
            TabId::Ofdm => "1-6: switch tabs | r: redraw schedule | q: quit",
            TabId::LinkMetrics => {
                "1-6: switch tabs | h/l: adjust SNR | r: redraw noise | q: quit"
            }
            TabId::Monitor => {
                "1-6: switch tabs | s: start/restart run | Esc: stop | h/l: adjust SNR | q: quit"
            }
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
            ])
        } else {
            Line::from(Span::styled(
                Self::get_help_text(state),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
