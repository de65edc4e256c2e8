//! Modulation schemes and spectral efficiency.

/// Divisor modeling fixed OFDM framing overhead in the data rate approximation.
pub const OFDM_OVERHEAD_DIVISOR: f64 = 7.0;

/// Supported modulation schemes with their spectral efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modulation {
    Qpsk,
    Qam16,
    Qam64,
}

impl Modulation {
    pub const ALL: [Modulation; 3] = [Modulation::Qpsk, Modulation::Qam16, Modulation::Qam64];

    pub fn bits_per_symbol(&self) -> u32 {
        match self {
            Modulation::Qpsk => 2,
            Modulation::Qam16 => 4,
            Modulation::Qam64 => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Modulation::Qpsk => "QPSK (2 bits/sym)",
            Modulation::Qam16 => "16-QAM (4 bits/sym)",
            Modulation::Qam64 => "64-QAM (6 bits/sym)",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Modulation::Qpsk => Modulation::Qam16,
            Modulation::Qam16 => Modulation::Qam64,
            Modulation::Qam64 => Modulation::Qpsk,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Modulation::Qpsk => Modulation::Qam64,
            Modulation::Qam16 => Modulation::Qpsk,
            Modulation::Qam64 => Modulation::Qam16,
        }
    }
}

/// Approximate data rate in bits per second.
///
/// `rate = bandwidth · bits_per_symbol / 7`, the divisor standing in for OFDM
/// framing overhead. Strictly increasing in both bandwidth and bits/symbol.
pub fn data_rate_bps(bandwidth_mhz: f64, modulation: Modulation) -> f64 {
    bandwidth_mhz * 1e6 * modulation.bits_per_symbol() as f64 / OFDM_OVERHEAD_DIVISOR
}
