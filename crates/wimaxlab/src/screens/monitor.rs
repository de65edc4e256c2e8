//! Real-time network monitoring screen.
//!
//! Runs the 30-step monitor: each tick perturbs the configured SNR, recomputes
//! BER and throughput, and appends to the two growing traces. The run is
//! driven by the app's tick timer, so the interface stays responsive and Esc
//! cancels between steps.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use wimaxlab_core::MonitorState;
use wimaxlab_core::monitor::MONITOR_STEPS;

use crate::components::charts::curves;
use crate::components::{Component, EventResult};
use crate::screens::Screen;
use crate::state::AppState;
use crate::util::format::format_mbps;
use crate::util::styles::{HELP_COLOR, focused_block};

pub struct MonitorScreen;

impl MonitorScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for MonitorScreen {
    fn title(&self) -> &str {
        "Real-Time Network Monitoring"
    }
}

impl Component for MonitorScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('s') | KeyCode::Enter => {
                // Re-trigger while running restarts the run
                state.start_monitor();
                EventResult::Handled
            }
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
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = focused_block(self.title(), false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(8)])
            .split(inner);

        let status = match state.monitor.state() {
            MonitorState::Running { step } => Line::from(vec![
                Span::styled(
                    "  ● Running ",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "step {}/{MONITOR_STEPS}   SNR {} dB ± 2 dB   data rate {}",
                    step + 1,
                    state.controls.snr_db,
                    format_mbps(state.data_rate_bps())
                )),
            ]),
            MonitorState::Idle => Line::from(vec![
                Span::styled("  ○ Idle ", Style::default().fg(HELP_COLOR)),
                Span::styled(
                    format!(
                        "press s to start a {MONITOR_STEPS}-step live run (SNR {} dB)",
                        state.controls.snr_db
                    ),
                    Style::default().fg(HELP_COLOR),
                ),
            ]),
        };
        frame.render_widget(Paragraph::new(status), chunks[0]);

        if state.monitor.samples().is_empty() {
            let hint = Paragraph::new(Line::from(Span::styled(
                "  No trace yet. A run appends one (time, BER, throughput) point per step.",
                Style::default().fg(HELP_COLOR),
            )));
            frame.render_widget(hint, chunks[1]);
        } else {
            curves::render_monitor_panels(frame, chunks[1], state.monitor.samples());
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
    fn test_start_key_begins_run() {
        let mut screen = MonitorScreen::new();
        let mut state = AppState::new(Some(42)).unwrap();

        assert!(!state.monitor.is_running());
        screen.handle_key(key(KeyCode::Char('s')), &mut state);
        assert!(state.monitor.is_running());
    }

    #[test]
    fn test_retrigger_restarts() {
        let mut screen = MonitorScreen::new();
        let mut state = AppState::new(Some(42)).unwrap();

        screen.handle_key(key(KeyCode::Char('s')), &mut state);
        let rate = state.data_rate_bps();
        let snr = state.controls.snr_db;
        let mut rng = {
            use rand::SeedableRng;
            rand::rngs::StdRng::seed_from_u64(1)
        };
        for _ in 0..4 {
            state.monitor.step(snr, rate, &mut rng).unwrap();
        }
        assert_eq!(state.monitor.samples().len(), 4);

        screen.handle_key(key(KeyCode::Enter), &mut state);
        assert!(state.monitor.is_running());
        assert!(state.monitor.samples().is_empty());
    }
}
