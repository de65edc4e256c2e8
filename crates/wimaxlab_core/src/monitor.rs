//! Live monitoring run: a two-state animation driver.
//!
//! A run is exactly [`MONITOR_STEPS`] steps. Each step perturbs the configured
//! SNR by a uniform offset in ±[`SNR_JITTER_DB`] dB, recomputes BER and
//! throughput, and appends one sample. The caller drives steps from its own
//! timer (the TUI ticks roughly every [`STEP_INTERVAL_MS`] ms), so a run never
//! blocks the interface and can be cancelled between steps.
//!
//! Starting while a run is in progress restarts it from scratch.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::error::SampleError;
use crate::link;

/// Steps per monitoring run.
pub const MONITOR_STEPS: u32 = 30;

/// Maximum SNR perturbation per step (dB, symmetric).
pub const SNR_JITTER_DB: f64 = 2.0;

/// Nominal pause between animation steps.
pub const STEP_INTERVAL_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitorState {
    #[default]
    Idle,
    Running {
        step: u32,
    },
}

/// One appended (time, BER, throughput) triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorSample {
    pub t: u32,
    pub ber: f64,
    pub throughput_bps: f64,
}

/// The monitoring run state machine with its accumulated trace.
#[derive(Debug, Clone, Default)]
pub struct Monitor {
    state: MonitorState,
    samples: Vec<MonitorSample>,
}

impl Monitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, MonitorState::Running { .. })
    }

    pub fn samples(&self) -> &[MonitorSample] {
        &self.samples
    }

    /// Begin a run, discarding any previous trace. Re-triggering while a run
    /// is in progress restarts it.
    pub fn start(&mut self) {
        self.samples.clear();
        self.state = MonitorState::Running { step: 0 };
    }

    /// Stop a run between steps. The partial trace stays available.
    pub fn cancel(&mut self) {
        self.state = MonitorState::Idle;
    }

    /// Advance one step: perturb the SNR, recompute BER/throughput, append a
    /// sample. Returns `Ok(None)` when idle. The run returns to `Idle` after
    /// the final step.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        snr_db: i32,
        data_rate_bps: f64,
        rng: &mut R,
    ) -> Result<Option<MonitorSample>, SampleError> {
        let MonitorState::Running { step } = self.state else {
            return Ok(None);
        };

        let offset = Uniform::new(-SNR_JITTER_DB, SNR_JITTER_DB)
            .map_err(|_| SampleError::InvalidUniform {
                low: -SNR_JITTER_DB,
                high: SNR_JITTER_DB,
            })?
            .sample(rng);

        let snr = snr_db as f64 + offset;
        let ber = link::bit_error_rate(snr);
        let sample = MonitorSample {
            t: step,
            ber,
            throughput_bps: data_rate_bps * (1.0 - ber),
        };
        self.samples.push(sample);

        let next = step + 1;
        self.state = if next >= MONITOR_STEPS {
            MonitorState::Idle
        } else {
            MonitorState::Running { step: next }
        };

        Ok(Some(sample))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_full_run_produces_thirty_ordered_samples() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut monitor = Monitor::new();
        monitor.start();

        let mut steps = 0;
        while monitor.is_running() {
            monitor.step(10, 1e6, &mut rng).unwrap();
            steps += 1;
            assert!(steps <= MONITOR_STEPS);
        }

        assert_eq!(monitor.samples().len(), 30);
        for (i, sample) in monitor.samples().iter().enumerate() {
            assert_eq!(sample.t, i as u32);
            assert!(sample.ber >= 0.0 && sample.ber <= 0.5);
            assert!(sample.throughput_bps <= 1e6);
        }
        assert_eq!(monitor.state(), MonitorState::Idle);
    }

    #[test]
    fn test_step_when_idle_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut monitor = Monitor::new();
        assert_eq!(monitor.step(10, 1e6, &mut rng).unwrap(), None);
        assert!(monitor.samples().is_empty());
    }

    #[test]
    fn test_retrigger_restarts_from_scratch() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut monitor = Monitor::new();
        monitor.start();
        for _ in 0..5 {
            monitor.step(10, 1e6, &mut rng).unwrap();
        }
        assert_eq!(monitor.samples().len(), 5);

        monitor.start();
        assert!(monitor.samples().is_empty());
        assert_eq!(monitor.state(), MonitorState::Running { step: 0 });
    }

    #[test]
    fn test_cancel_keeps_partial_trace() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut monitor = Monitor::new();
        monitor.start();
        for _ in 0..7 {
            monitor.step(10, 1e6, &mut rng).unwrap();
        }
        monitor.cancel();

        assert_eq!(monitor.state(), MonitorState::Idle);
        assert_eq!(monitor.samples().len(), 7);
        // Cancelled run does not advance further
        assert_eq!(monitor.step(10, 1e6, &mut rng).unwrap(), None);
    }

    #[test]
    fn test_perturbation_stays_within_jitter_band() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut monitor = Monitor::new();
        monitor.start();

        // At 10 dB the perturbed SNR stays in [8, 12], so BER stays within
        // the band's endpoint values.
        let hi = link::bit_error_rate(8.0);
        let lo = link::bit_error_rate(12.0);
        while let Some(sample) = monitor.step(10, 1e6, &mut rng).unwrap() {
            assert!(sample.ber >= lo && sample.ber <= hi);
        }
    }
}
