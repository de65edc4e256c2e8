//! Link quality metrics screen.
//!
//! The SNR slider drives BER, throughput, delay, jitter and packet loss
//! readouts, with the log-scale BER reference curve below. Metrics are cached
//! in the app state and refreshed on edits, since delay and jitter carry an
//! intentional random component.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use wimaxlab_core::controls::{SNR_DB_MAX, SNR_DB_MIN};

use crate::components::charts::curves;
use crate::components::slider::SliderRow;
use crate::components::{Component, EventResult};
use crate::screens::Screen;
use crate::state::AppState;
use crate::util::format::{format_ber, format_mbps, format_ms, format_percent};
use crate::util::styles::{HELP_COLOR, METRIC_COLOR, focused_block};

pub struct LinkMetricsScreen;

impl LinkMetricsScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for LinkMetricsScreen {
    fn title(&self) -> &str {
        "QoS Metrics"
    }
}

impl Component for LinkMetricsScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                state.controls.nudge_snr(-1);
                state.refresh_link_metrics();
                EventResult::Handled
            }
            KeyCode::Right | KeyCode::Char('l') => {
                state.controls.nudge_snr(1);
                state.refresh_link_metrics();
                EventResult::Handled
            }
            KeyCode::Char('r') => {
                // Same SNR, fresh delay/jitter noise
                state.refresh_link_metrics();
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
                Constraint::Length(1), // SNR slider
                Constraint::Length(1), // spacer
                Constraint::Length(3), // metric columns
                Constraint::Min(8),    // BER curve
            ])
            .split(inner);

        let c = &state.controls;

        SliderRow::new(
            "Signal-to-Noise Ratio",
            format!("{} dB", c.snr_db),
            c.snr_db as f64,
            SNR_DB_MIN as f64,
            SNR_DB_MAX as f64,
        )
        .focused(true)
        .render(frame, chunks[0]);

        self.render_metric_columns(frame, chunks[2], state);
        curves::render_ber_curve(frame, chunks[3]);
    }
}

impl LinkMetricsScreen {
    fn render_metric_columns(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let m = &state.link_metrics;
        let cells: [(&str, String); 5] = [
            ("BER", format_ber(m.ber)),
            ("Throughput", format_mbps(m.throughput_bps)),
            ("Delay", format_ms(m.delay_ms)),
            ("Jitter", format_ms(m.jitter_ms)),
            ("PLR", format_percent(m.packet_loss_pct)),
        ];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(20); 5])
            .split(area);

        for (column, (label, value)) in columns.iter().zip(cells) {
            let lines = vec![
                Line::from(Span::styled(label, Style::default().fg(HELP_COLOR))),
                Line::from(Span::styled(
                    value,
                    Style::default()
                        .fg(METRIC_COLOR)
                        .add_modifier(Modifier::BOLD),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), *column);
        }
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
    fn test_snr_nudge_lowers_ber() {
        let mut screen = LinkMetricsScreen::new();
        let mut state = AppState::new(Some(42)).unwrap();
        let before = state.link_metrics.ber;

        screen.handle_key(key(KeyCode::Right), &mut state);
        assert_eq!(state.controls.snr_db, 11);
        assert!(state.link_metrics.ber < before);
    }

    #[test]
    fn test_redraw_keeps_ber_but_changes_noise() {
        let mut screen = LinkMetricsScreen::new();
        let mut state = AppState::new(Some(42)).unwrap();
        let before = state.link_metrics;

        screen.handle_key(key(KeyCode::Char('r')), &mut state);
        // Deterministic part is unchanged, noisy part is redrawn
        assert_eq!(state.link_metrics.ber, before.ber);
        assert_eq!(state.link_metrics.throughput_bps, before.throughput_bps);
        assert!(
            state.link_metrics.delay_ms != before.delay_ms
                || state.link_metrics.jitter_ms != before.jitter_ms
        );
    }
}
