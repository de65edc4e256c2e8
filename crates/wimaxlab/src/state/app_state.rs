use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use wimaxlab_core::error::SampleError;
use wimaxlab_core::{ControlSnapshot, LinkMetrics, Monitor, QosClass, link, modulation, schedule};

use crate::state::TabId;

/// Shared application state: the control snapshot plus everything derived from
/// it that must survive between frames (the schedule sample, the cached link
/// metrics, the monitor trace).
pub struct AppState {
    pub controls: ControlSnapshot,
    pub active_tab: TabId,
    /// Current slot schedule sample (redrawn on request, not per frame)
    pub schedule: Vec<QosClass>,
    /// Link metrics for the current controls. Cached because delay/jitter are
    /// random draws; recomputing per frame would make the readouts flicker.
    pub link_metrics: LinkMetrics,
    pub monitor: Monitor,
    pub rng: SmallRng,
    /// When the last monitor step ran
    pub last_step: Instant,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl AppState {
    pub fn new(seed: Option<u64>) -> Result<Self, SampleError> {
        let mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let controls = ControlSnapshot::default();
        let schedule = schedule::sample_schedule(&mut rng)?;
        let link_metrics = link::evaluate(
            controls.snr_db as f64,
            modulation::data_rate_bps(controls.bandwidth_mhz, controls.modulation),
            &mut rng,
        )?;

        Ok(Self {
            controls,
            active_tab: TabId::Coverage,
            schedule,
            link_metrics,
            monitor: Monitor::new(),
            rng,
            last_step: Instant::now(),
            error_message: None,
            exit: false,
        })
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Data rate implied by the current bandwidth and modulation controls.
    pub fn data_rate_bps(&self) -> f64 {
        modulation::data_rate_bps(self.controls.bandwidth_mhz, self.controls.modulation)
    }

    /// Recompute the cached link metrics. Call after any control edit that
    /// feeds them (SNR, bandwidth, modulation).
    pub fn refresh_link_metrics(&mut self) {
        let rate = self.data_rate_bps();
        match link::evaluate(self.controls.snr_db as f64, rate, &mut self.rng) {
            Ok(metrics) => self.link_metrics = metrics,
            Err(e) => self.set_error(format!("Failed to evaluate link metrics: {e}")),
        }
    }

    /// Draw a fresh slot schedule sample.
    pub fn resample_schedule(&mut self) {
        match schedule::sample_schedule(&mut self.rng) {
            Ok(schedule) => self.schedule = schedule,
            Err(e) => self.set_error(format!("Failed to sample schedule: {e}")),
        }
    }

    /// Start (or restart) a monitoring run.
    pub fn start_monitor(&mut self) {
        tracing::info!(snr_db = self.controls.snr_db, "starting monitor run");
        self.monitor.start();
        self.last_step = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wimaxlab_core::schedule::SLOT_COUNT;

    #[test]
    fn test_new_state_is_ready_to_render() {
        let state = AppState::new(Some(42)).unwrap();
        assert_eq!(state.active_tab, TabId::Coverage);
        assert_eq!(state.schedule.len(), SLOT_COUNT);
        assert!(state.link_metrics.ber > 0.0);
        assert!(!state.monitor.is_running());
        assert!(!state.exit);
    }

    #[test]
    fn test_seeded_states_agree() {
        let a = AppState::new(Some(7)).unwrap();
        let b = AppState::new(Some(7)).unwrap();
        assert_eq!(a.schedule, b.schedule);
        assert_eq!(a.link_metrics, b.link_metrics);
    }

    #[test]
    fn test_refresh_tracks_snr_changes() {
        let mut state = AppState::new(Some(42)).unwrap();
        state.controls.nudge_snr(20);
        state.refresh_link_metrics();
        // 30 dB: BER underflows to zero, throughput hits the data rate
        assert_eq!(state.link_metrics.ber, 0.0);
        assert_eq!(state.link_metrics.throughput_bps, state.data_rate_bps());
    }

    #[test]
    fn test_resample_keeps_length() {
        let mut state = AppState::new(Some(42)).unwrap();
        let before = state.schedule.clone();
        state.resample_schedule();
        assert_eq!(state.schedule.len(), SLOT_COUNT);
        // Overwhelmingly likely to differ with a fresh draw of 20 slots
        let _ = before;
        assert!(state.error_message.is_none());
    }
}
