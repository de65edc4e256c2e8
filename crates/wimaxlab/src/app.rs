use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use wimaxlab_core::error::SampleError;
use wimaxlab_core::monitor::STEP_INTERVAL_MS;

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::screens::{
    coverage::CoverageScreen, link_metrics::LinkMetricsScreen, monitor::MonitorScreen,
    ofdm::OfdmScreen, qos::QosScreen, spectral::SpectralScreen,
};
use crate::state::{AppState, TabId};

/// Poll timeout while nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(100);
/// Poll timeout during a monitor run, short enough to keep step timing tight
const RUNNING_POLL: Duration = Duration::from_millis(25);

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    coverage_screen: CoverageScreen,
    spectral_screen: SpectralScreen,
    qos_screen: QosScreen,
    ofdm_screen: OfdmScreen,
    link_metrics_screen: LinkMetricsScreen,
    monitor_screen: MonitorScreen,
}

impl App {
    pub fn new(seed: Option<u64>) -> Result<Self, SampleError> {
        let state = AppState::new(seed)?;

        Ok(Self {
            state,
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            coverage_screen: CoverageScreen::new(),
            spectral_screen: SpectralScreen::new(),
            qos_screen: QosScreen::new(),
            ofdm_screen: OfdmScreen::new(),
            link_metrics_screen: LinkMetricsScreen::new(),
            monitor_screen: MonitorScreen::new(),
        })
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
            self.advance_monitor();
        }

        Ok(())
    }

    /// Step the monitor when its interval has elapsed. Runs between polls so
    /// input stays responsive while the traces grow.
    fn advance_monitor(&mut self) {
        if !self.state.monitor.is_running() {
            return;
        }
        if self.state.last_step.elapsed() < Duration::from_millis(STEP_INTERVAL_MS) {
            return;
        }

        self.state.last_step = std::time::Instant::now();
        let rate = self.state.data_rate_bps();
        let snr = self.state.controls.snr_db;
        match self.state.monitor.step(snr, rate, &mut self.state.rng) {
            Ok(Some(sample)) => {
                tracing::debug!(t = sample.t, ber = sample.ber, "monitor step");
                if !self.state.monitor.is_running() {
                    tracing::info!("monitor run complete");
                }
            }
            Ok(None) => {}
            Err(e) => {
                self.state.set_error(format!("Monitor step failed: {e}"));
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Coverage => self.coverage_screen.render(frame, area, &self.state),
            TabId::Spectral => self.spectral_screen.render(frame, area, &self.state),
            TabId::Qos => self.qos_screen.render(frame, area, &self.state),
            TabId::Ofdm => self.ofdm_screen.render(frame, area, &self.state),
            TabId::LinkMetrics => self.link_metrics_screen.render(frame, area, &self.state),
            TabId::Monitor => self.monitor_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = if self.state.monitor.is_running() {
            RUNNING_POLL
        } else {
            IDLE_POLL
        };
        if !event::poll(timeout)? {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                if self.state.monitor.is_running() {
                    // Partial trace stays on screen after a cancel
                    self.state.monitor.cancel();
                } else {
                    self.state.clear_error();
                }
                return;
            }
            _ => {}
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Then try active screen
        let _ = match self.state.active_tab {
            TabId::Coverage => self.coverage_screen.handle_key(key_event, &mut self.state),
            TabId::Spectral => self.spectral_screen.handle_key(key_event, &mut self.state),
            TabId::Qos => self.qos_screen.handle_key(key_event, &mut self.state),
            TabId::Ofdm => self.ofdm_screen.handle_key(key_event, &mut self.state),
            TabId::LinkMetrics => self
                .link_metrics_screen
                .handle_key(key_event, &mut self.state),
            TabId::Monitor => self.monitor_screen.handle_key(key_event, &mut self.state),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use wimaxlab_core::monitor::MONITOR_STEPS;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_q_exits() {
        let mut app = App::new(Some(42)).unwrap();
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.state.exit);
    }

    #[test]
    fn test_ctrl_c_exits() {
        let mut app = App::new(Some(42)).unwrap();
        app.handle_key_event(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        });
        assert!(app.state.exit);
    }

    #[test]
    fn test_only_global_bindings_exit() {
        let mut app = App::new(Some(42)).unwrap();
        // Screen-level keys never quit the app
        app.handle_key_event(key(KeyCode::Char('x')));
        app.handle_key_event(key(KeyCode::Right));
        app.handle_key_event(key(KeyCode::Esc));
        assert!(!app.state.exit);
    }

    #[test]
    fn test_tab_keys_switch_screens() {
        let mut app = App::new(Some(42)).unwrap();
        app.handle_key_event(key(KeyCode::Char('3')));
        assert_eq!(app.state.active_tab, TabId::Qos);
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.state.active_tab, TabId::Ofdm);
    }

    #[test]
    fn test_esc_cancels_running_monitor() {
        let mut app = App::new(Some(42)).unwrap();
        app.state.start_monitor();
        let rate = app.state.data_rate_bps();
        let snr = app.state.controls.snr_db;
        app.state.monitor.step(snr, rate, &mut app.state.rng).unwrap();

        app.handle_key_event(key(KeyCode::Esc));
        assert!(!app.state.monitor.is_running());
        // Cancel keeps the partial trace
        assert_eq!(app.state.monitor.samples().len(), 1);
    }

    #[test]
    fn test_esc_clears_error_when_idle() {
        let mut app = App::new(Some(42)).unwrap();
        app.state.set_error("boom".to_string());
        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.state.error_message.is_none());
    }

    #[test]
    fn test_advance_monitor_runs_to_completion() {
        let mut app = App::new(Some(42)).unwrap();
        app.state.start_monitor();
        // Past-due timer so every call steps immediately
        for _ in 0..MONITOR_STEPS {
            app.state.last_step =
                std::time::Instant::now() - Duration::from_millis(STEP_INTERVAL_MS + 1);
            app.advance_monitor();
        }
        assert!(!app.state.monitor.is_running());
        assert_eq!(app.state.monitor.samples().len(), MONITOR_STEPS as usize);
    }
}
