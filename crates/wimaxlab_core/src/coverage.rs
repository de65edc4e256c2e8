//! Coverage range estimation.
//!
//! Friis-style free-space estimate extended with a path loss exponent:
//! `range = (wavelength / 4π) · 10^((Ptx − Prx) / (10·n))`.

use std::f64::consts::PI;

/// Speed of light (m/s)
pub const SPEED_OF_LIGHT_M_S: f64 = 3.0e8;

/// Typical receiver sensitivity threshold (dBm)
pub const RX_SENSITIVITY_DBM: f64 = -90.0;

/// Carrier wavelength in meters for a frequency in GHz.
pub fn wavelength_m(freq_ghz: f64) -> f64 {
    SPEED_OF_LIGHT_M_S / (freq_ghz * 1e9)
}

/// Estimated maximum coverage radius in meters.
///
/// Monotonically increasing in transmit power and decreasing in the path loss
/// exponent; always positive for in-range inputs.
pub fn coverage_radius_m(freq_ghz: f64, tx_power_dbm: i32, path_loss_exp: f64) -> f64 {
    let link_margin_db = tx_power_dbm as f64 - RX_SENSITIVITY_DBM;
    (wavelength_m(freq_ghz) / (4.0 * PI)) * 10f64.powf(link_margin_db / (10.0 * path_loss_exp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_positive_at_defaults() {
        let r = coverage_radius_m(2.5, 20, 3.5);
        assert!(r > 0.0);
        assert!(r.is_finite());
    }

    #[test]
    fn test_radius_increases_with_tx_power() {
        let low = coverage_radius_m(2.5, 10, 3.5);
        let mid = coverage_radius_m(2.5, 20, 3.5);
        let high = coverage_radius_m(2.5, 40, 3.5);
        assert!(low < mid);
        assert!(mid < high);
    }

    #[test]
    fn test_radius_decreases_with_path_loss() {
        let open = coverage_radius_m(2.5, 20, 2.0);
        let urban = coverage_radius_m(2.5, 20, 3.5);
        let dense = coverage_radius_m(2.5, 20, 5.0);
        assert!(open > urban);
        assert!(urban > dense);
    }

    #[test]
    fn test_wavelength() {
        // 3 GHz carrier has a 10 cm wavelength
        let wl = wavelength_m(3.0);
        assert!((wl - 0.1).abs() < 1e-12);
    }
}
