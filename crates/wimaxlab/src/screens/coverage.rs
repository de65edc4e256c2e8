//! Coverage area calculator screen.
//!
//! Three sliders (carrier frequency, transmit power, path loss exponent) bound
//! to the Friis/path-loss range estimate, re-evaluated on every edit.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use wimaxlab_core::controls::{
    BANDWIDTH_MHZ_MAX, FREQ_GHZ_MAX, FREQ_GHZ_MIN, PATH_LOSS_EXP_MAX, PATH_LOSS_EXP_MIN,
    TX_POWER_DBM_MAX, TX_POWER_DBM_MIN,
};
use wimaxlab_core::coverage::{self, RX_SENSITIVITY_DBM};
use wimaxlab_core::modulation::data_rate_bps;

use crate::components::slider::SliderRow;
use crate::components::{Component, EventResult};
use crate::screens::Screen;
use crate::state::AppState;
use crate::util::format::{format_ghz, format_km};
use crate::util::styles::{HELP_COLOR, METRIC_COLOR, focused_block};

const CONTROL_COUNT: usize = 3;

pub struct CoverageScreen {
    focus: usize,
}

impl CoverageScreen {
    pub fn new() -> Self {
        Self { focus: 0 }
    }
}

impl Screen for CoverageScreen {
    fn title(&self) -> &str {
        "Coverage Area Calculator"
    }
}

impl Component for CoverageScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.focus = (self.focus + CONTROL_COUNT - 1) % CONTROL_COUNT;
                EventResult::Handled
            }
            KeyCode::Down | KeyCode::Char('j') => {
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
                Constraint::Length(1), // freq slider
                Constraint::Length(1), // tx power slider
                Constraint::Length(1), // path loss slider
                Constraint::Length(1), // spacer
                Constraint::Length(1), // headline metric
                Constraint::Length(1), // spacer
                Constraint::Min(0),    // detail lines
            ])
            .split(inner);

        let c = &state.controls;

        SliderRow::new(
            "Carrier Frequency",
            format_ghz(c.freq_ghz),
            c.freq_ghz,
            FREQ_GHZ_MIN,
            FREQ_GHZ_MAX,
        )
        .focused(self.focus == 0)
        .render(frame, chunks[0]);

        SliderRow::new(
            "Transmit Power",
            format!("{} dBm", c.tx_power_dbm),
            c.tx_power_dbm as f64,
            TX_POWER_DBM_MIN as f64,
            TX_POWER_DBM_MAX as f64,
        )
        .focused(self.focus == 1)
        .render(frame, chunks[1]);

        SliderRow::new(
            "Path Loss Exponent",
            format!("n = {:.1}", c.path_loss_exp),
            c.path_loss_exp,
            PATH_LOSS_EXP_MIN,
            PATH_LOSS_EXP_MAX,
        )
        .focused(self.focus == 2)
        .render(frame, chunks[2]);

        let radius_m = coverage::coverage_radius_m(c.freq_ghz, c.tx_power_dbm, c.path_loss_exp);
        let metric = Line::from(vec![
            Span::raw("  Estimated Coverage Radius: "),
            Span::styled(
                format_km(radius_m),
                Style::default()
                    .fg(METRIC_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(metric), chunks[4]);

        let details = vec![
            Line::from(Span::styled(
                format!(
                    "  Wavelength: {:.4} m   Receiver sensitivity: {:.0} dBm",
                    coverage::wavelength_m(c.freq_ghz),
                    RX_SENSITIVITY_DBM
                ),
                Style::default().fg(HELP_COLOR),
            )),
            Line::from(Span::styled(
                format!(
                    "  At max bandwidth ({BANDWIDTH_MHZ_MAX} MHz) this cell could carry {:.2} Mbps",
                    data_rate_bps(BANDWIDTH_MHZ_MAX, c.modulation) / 1e6
                ),
                Style::default().fg(HELP_COLOR),
            )),
        ];
        frame.render_widget(Paragraph::new(details), chunks[6]);
    }
}

impl CoverageScreen {
    fn adjust(&mut self, state: &mut AppState, direction: i32) {
        match self.focus {
            0 => state.controls.nudge_freq(direction),
            1 => state.controls.nudge_tx_power(direction),
            _ => state.controls.nudge_path_loss(direction),
        }
    }
}
