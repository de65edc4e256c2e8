//! Spectral efficiency and data rate screen.
//!
//! A modulation selector and a bandwidth slider feed the approximate data rate
//! formula; bandwidth or modulation edits also refresh the cached link metrics
//! since throughput depends on the data rate.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use wimaxlab_core::Modulation;
use wimaxlab_core::controls::{BANDWIDTH_MHZ_MAX, BANDWIDTH_MHZ_MIN};
use wimaxlab_core::modulation::OFDM_OVERHEAD_DIVISOR;

use crate::components::slider::SliderRow;
use crate::components::{Component, EventResult};
use crate::screens::Screen;
use crate::state::AppState;
use crate::util::format::{format_mbps, format_mhz};
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, METRIC_COLOR, focused_block};

const CONTROL_COUNT: usize = 2;

pub struct SpectralScreen {
    focus: usize,
}

impl SpectralScreen {
    pub fn new() -> Self {
        Self { focus: 0 }
    }
}

impl Screen for SpectralScreen {
    fn title(&self) -> &str {
        "Spectral Efficiency & Data Rate"
    }
}

impl Component for SpectralScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Down | KeyCode::Char('j') => {
                self.focus = (self.focus + 1) % CONTROL_COUNT;
                EventResult::Handled
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.adjust(state, -1);
                EventResult::Handled
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.adjust(state, 1);
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
                Constraint::Length(1), // modulation choices
                Constraint::Length(1), // bandwidth slider
                Constraint::Length(1), // spacer
                Constraint::Length(1), // headline metric
                Constraint::Length(1), // spacer
                Constraint::Min(0),    // formula detail
            ])
            .split(inner);

        let c = &state.controls;

        // Modulation rendered as a radio row rather than a slider
        let marker = if self.focus == 0 { "❯ " } else { "  " };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(FOCUS_COLOR)),
            Span::styled(
                format!("{:<22}", "Modulation"),
                if self.focus == 0 {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                },
            ),
        ];
        for modulation in Modulation::ALL {
            let style = if modulation == c.modulation {
                Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let mark = if modulation == c.modulation { "(•) " } else { "( ) " };
            spans.push(Span::styled(format!("{mark}{}  ", modulation.label()), style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

        SliderRow::new(
            "Channel Bandwidth",
            format_mhz(c.bandwidth_mhz),
            c.bandwidth_mhz,
            BANDWIDTH_MHZ_MIN,
            BANDWIDTH_MHZ_MAX,
        )
        .focused(self.focus == 1)
        .render(frame, chunks[1]);

        let metric = Line::from(vec![
            Span::raw("  Approx. Data Rate: "),
            Span::styled(
                format_mbps(state.data_rate_bps()),
                Style::default()
                    .fg(METRIC_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(metric), chunks[3]);

        let detail = Line::from(Span::styled(
            format!(
                "  rate = bandwidth × {} bits/sym ÷ {:.0} (OFDM overhead)",
                c.modulation.bits_per_symbol(),
                OFDM_OVERHEAD_DIVISOR
            ),
            Style::default().fg(HELP_COLOR),
        ));
        frame.render_widget(Paragraph::new(detail), chunks[5]);
    }
}

impl SpectralScreen {
    fn adjust(&mut self, state: &mut AppState, direction: i32) {
        match self.focus {
            0 => state.controls.cycle_modulation(direction > 0),
            _ => state.controls.nudge_bandwidth(direction),
        }
        // Throughput in the link metrics depends on the data rate
        state.refresh_link_metrics();
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
    fn test_modulation_cycles() {
        let mut screen = SpectralScreen::new();
        let mut state = AppState::new(Some(42)).unwrap();

        screen.handle_key(key(KeyCode::Right), &mut state);
        assert_eq!(state.controls.modulation, Modulation::Qam16);
        screen.handle_key(key(KeyCode::Left), &mut state);
        assert_eq!(state.controls.modulation, Modulation::Qpsk);
    }

    #[test]
    fn test_bandwidth_edit_refreshes_metrics() {
        let mut screen = SpectralScreen::new();
        let mut state = AppState::new(Some(42)).unwrap();
        let before = state.link_metrics.throughput_bps;

        screen.handle_key(key(KeyCode::Down), &mut state); // focus bandwidth
        screen.handle_key(key(KeyCode::Right), &mut state);

        assert!((state.controls.bandwidth_mhz - 10.25).abs() < 1e-9);
        assert!(state.link_metrics.throughput_bps > before);
    }
}
