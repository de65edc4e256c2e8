//! Dashboard control snapshot.
//!
//! Every refresh cycle reads an immutable snapshot of the current control
//! values and hands it to the pure formula evaluators. The bounds here mirror
//! the on-screen controls exactly, and the nudge methods clamp on every edit,
//! so no out-of-range value ever reaches a formula.

use crate::modulation::Modulation;
use crate::qos::QosClass;

pub const FREQ_GHZ_MIN: f64 = 2.3;
pub const FREQ_GHZ_MAX: f64 = 3.5;
pub const FREQ_GHZ_STEP: f64 = 0.1;
pub const FREQ_GHZ_DEFAULT: f64 = 2.5;

pub const TX_POWER_DBM_MIN: i32 = 10;
pub const TX_POWER_DBM_MAX: i32 = 40;
pub const TX_POWER_DBM_DEFAULT: i32 = 20;

pub const PATH_LOSS_EXP_MIN: f64 = 2.0;
pub const PATH_LOSS_EXP_MAX: f64 = 5.0;
pub const PATH_LOSS_EXP_STEP: f64 = 0.1;
pub const PATH_LOSS_EXP_DEFAULT: f64 = 3.5;

pub const BANDWIDTH_MHZ_MIN: f64 = 1.25;
pub const BANDWIDTH_MHZ_MAX: f64 = 20.0;
pub const BANDWIDTH_MHZ_STEP: f64 = 0.25;
pub const BANDWIDTH_MHZ_DEFAULT: f64 = 10.0;

pub const SNR_DB_MIN: i32 = 0;
pub const SNR_DB_MAX: i32 = 30;
pub const SNR_DB_DEFAULT: i32 = 10;

/// Current value of every dashboard control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSnapshot {
    /// Carrier frequency (GHz)
    pub freq_ghz: f64,
    /// Transmit power (dBm)
    pub tx_power_dbm: i32,
    /// Path loss exponent (n)
    pub path_loss_exp: f64,
    /// Modulation scheme
    pub modulation: Modulation,
    /// Channel bandwidth (MHz)
    pub bandwidth_mhz: f64,
    /// Selected service class
    pub qos_class: QosClass,
    /// Signal-to-noise ratio (dB)
    pub snr_db: i32,
}

impl Default for ControlSnapshot {
    fn default() -> Self {
        Self {
            freq_ghz: FREQ_GHZ_DEFAULT,
            tx_power_dbm: TX_POWER_DBM_DEFAULT,
            path_loss_exp: PATH_LOSS_EXP_DEFAULT,
            modulation: Modulation::Qpsk,
            bandwidth_mhz: BANDWIDTH_MHZ_DEFAULT,
            qos_class: QosClass::Ugs,
            snr_db: SNR_DB_DEFAULT,
        }
    }
}

/// Move a value by `steps` grid increments and clamp to `[min, max]`.
///
/// Values are snapped back onto the step grid so repeated float nudges never
/// accumulate drift (0.1 is not exactly representable).
fn nudge_on_grid(value: f64, min: f64, max: f64, step: f64, steps: i32) -> f64 {
    let idx = ((value - min) / step).round() + steps as f64;
    (min + idx * step).clamp(min, max)
}

impl ControlSnapshot {
    pub fn nudge_freq(&mut self, steps: i32) {
        self.freq_ghz = nudge_on_grid(
            self.freq_ghz,
            FREQ_GHZ_MIN,
            FREQ_GHZ_MAX,
            FREQ_GHZ_STEP,
            steps,
        );
    }

    pub fn nudge_tx_power(&mut self, steps: i32) {
        self.tx_power_dbm =
            (self.tx_power_dbm + steps).clamp(TX_POWER_DBM_MIN, TX_POWER_DBM_MAX);
    }

    pub fn nudge_path_loss(&mut self, steps: i32) {
        self.path_loss_exp = nudge_on_grid(
            self.path_loss_exp,
            PATH_LOSS_EXP_MIN,
            PATH_LOSS_EXP_MAX,
            PATH_LOSS_EXP_STEP,
            steps,
        );
    }

    pub fn nudge_bandwidth(&mut self, steps: i32) {
        self.bandwidth_mhz = nudge_on_grid(
            self.bandwidth_mhz,
            BANDWIDTH_MHZ_MIN,
            BANDWIDTH_MHZ_MAX,
            BANDWIDTH_MHZ_STEP,
            steps,
        );
    }

    pub fn nudge_snr(&mut self, steps: i32) {
        self.snr_db = (self.snr_db + steps).clamp(SNR_DB_MIN, SNR_DB_MAX);
    }

    pub fn cycle_modulation(&mut self, forward: bool) {
        self.modulation = if forward {
            self.modulation.next()
        } else {
            self.modulation.prev()
        };
    }

    pub fn cycle_qos(&mut self, forward: bool) {
        self.qos_class = if forward {
            self.qos_class.next()
        } else {
            self.qos_class.prev()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard() {
        let c = ControlSnapshot::default();
        assert_eq!(c.freq_ghz, 2.5);
        assert_eq!(c.tx_power_dbm, 20);
        assert_eq!(c.path_loss_exp, 3.5);
        assert_eq!(c.modulation, Modulation::Qpsk);
        assert_eq!(c.bandwidth_mhz, 10.0);
        assert_eq!(c.qos_class, QosClass::Ugs);
        assert_eq!(c.snr_db, 10);
    }

    #[test]
    fn test_nudges_clamp_at_bounds() {
        let mut c = ControlSnapshot::default();
        c.nudge_freq(1000);
        assert_eq!(c.freq_ghz, FREQ_GHZ_MAX);
        c.nudge_freq(-1000);
        assert_eq!(c.freq_ghz, FREQ_GHZ_MIN);

        c.nudge_tx_power(1000);
        assert_eq!(c.tx_power_dbm, TX_POWER_DBM_MAX);
        c.nudge_tx_power(-1000);
        assert_eq!(c.tx_power_dbm, TX_POWER_DBM_MIN);

        c.nudge_snr(-1000);
        assert_eq!(c.snr_db, SNR_DB_MIN);
        c.nudge_snr(1000);
        assert_eq!(c.snr_db, SNR_DB_MAX);
    }

    #[test]
    fn test_float_nudges_stay_on_grid() {
        let mut c = ControlSnapshot::default();
        // 12 steps down from 3.5 should land exactly on 2.3, not 2.2999...
        for _ in 0..12 {
            c.nudge_freq(-1);
        }
        assert_eq!(c.freq_ghz, FREQ_GHZ_MIN);

        for _ in 0..200 {
            c.nudge_bandwidth(1);
        }
        assert_eq!(c.bandwidth_mhz, BANDWIDTH_MHZ_MAX);
        c.nudge_bandwidth(-1);
        assert_eq!(c.bandwidth_mhz, 19.75);
    }

    #[test]
    fn test_cycles_wrap() {
        let mut c = ControlSnapshot::default();
        for _ in 0..3 {
            c.cycle_modulation(true);
        }
        assert_eq!(c.modulation, Modulation::Qpsk);
        for _ in 0..4 {
            c.cycle_qos(false);
        }
        assert_eq!(c.qos_class, QosClass::Ugs);
    }
}
