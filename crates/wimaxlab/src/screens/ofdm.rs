//! OFDM subcarrier and slot scheduling screen.
//!
//! Two static illustrations: the fixed 64-subcarrier allocation map and the
//! randomly drawn 20-slot schedule (resampled on request).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use wimaxlab_core::ofdm;

use crate::components::charts::spectrum;
use crate::components::{Component, EventResult};
use crate::screens::Screen;
use crate::state::AppState;
use crate::util::styles::focused_block;

pub struct OfdmScreen;

impl OfdmScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for OfdmScreen {
    fn title(&self) -> &str {
        "OFDM & Scheduling"
    }
}

impl Component for OfdmScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('r') => {
                state.resample_schedule();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(6)])
            .split(area);

        let subcarrier_block = focused_block("OFDMA Subcarrier Allocation", false);
        let subcarrier_area = subcarrier_block.inner(chunks[0]);
        frame.render_widget(subcarrier_block, chunks[0]);
        spectrum::render_subcarriers(frame, subcarrier_area, &ofdm::subcarrier_allocation());

        let schedule_block = focused_block("Simplified WiMAX Slot Scheduling [r: redraw]", false);
        let schedule_area = schedule_block.inner(chunks[1]);
        frame.render_widget(schedule_block, chunks[1]);
        spectrum::render_schedule_strip(frame, schedule_area, &state.schedule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use wimaxlab_core::schedule::SLOT_COUNT;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_redraw_resamples_schedule() {
        let mut screen = OfdmScreen::new();
        let mut state = AppState::new(Some(42)).unwrap();

        let result = screen.handle_key(key(KeyCode::Char('r')), &mut state);
        assert_eq!(result, EventResult::Handled);
        assert_eq!(state.schedule.len(), SLOT_COUNT);
    }

    #[test]
    fn test_other_keys_pass_through() {
        let mut screen = OfdmScreen::new();
        let mut state = AppState::new(Some(42)).unwrap();
        let result = screen.handle_key(key(KeyCode::Char('x')), &mut state);
        assert_eq!(result, EventResult::NotHandled);
    }
}
