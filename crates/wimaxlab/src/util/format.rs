/// Format a distance in meters as kilometers
pub fn format_km(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}

/// Format a bit rate as Mbps
pub fn format_mbps(bps: f64) -> String {
    format!("{:.2} Mbps", bps / 1e6)
}

/// Format a bit error rate (six decimal places, matching the dashboard readout)
pub fn format_ber(ber: f64) -> String {
    format!("{:.6}", ber)
}

/// Format a duration in milliseconds
pub fn format_ms(ms: f64) -> String {
    format!("{:.2} ms", ms)
}

/// Format a percentage value that is already scaled to 0-100
pub fn format_percent(pct: f64) -> String {
    format!("{:.2} %", pct)
}

/// Format a frequency in GHz
pub fn format_ghz(ghz: f64) -> String {
    format!("{:.1} GHz", ghz)
}

/// Format a bandwidth in MHz
pub fn format_mhz(mhz: f64) -> String {
    format!("{:.2} MHz", mhz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        assert_eq!(format_km(12_345.6), "12.35 km");
        assert_eq!(format_mbps(5_714_285.714), "5.71 Mbps");
        assert_eq!(format_ber(0.183_939_72), "0.183940");
        assert_eq!(format_ber(0.0), "0.000000");
        assert_eq!(format_ms(4.546), "4.55 ms");
        assert_eq!(format_ms(12.5), "12.50 ms");
        assert_eq!(format_percent(18.39), "18.39 %");
        assert_eq!(format_ghz(2.5), "2.5 GHz");
        assert_eq!(format_mhz(1.25), "1.25 MHz");
    }
}
