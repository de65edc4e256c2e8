//! Link quality metrics derived from SNR.
//!
//! BER uses the exponential QPSK approximation `0.5·e^(−SNR_linear)`. Delay and
//! jitter carry an illustrative uniform-random component scaled inversely with
//! SNR; the dashboard keeps the SNR control at ≥ 0 dB so the `snr + 1` divisor
//! never reaches zero.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::error::SampleError;

/// Sample count for the reference BER-vs-SNR curve.
pub const BER_CURVE_POINTS: usize = 50;

/// SNR sweep range for the reference curve (dB).
pub const BER_CURVE_SNR_DB: (f64, f64) = (0.0, 30.0);

/// Raw delay noise range before SNR scaling (ms).
pub const DELAY_RANGE_MS: (f64, f64) = (10.0, 50.0);

/// Raw jitter noise range before SNR scaling (ms).
pub const JITTER_RANGE_MS: (f64, f64) = (1.0, 10.0);

/// Convert an SNR in dB to linear scale.
pub fn snr_linear(snr_db: f64) -> f64 {
    10f64.powf(snr_db / 10.0)
}

/// Bit error rate for a given SNR in dB (QPSK approximation).
///
/// Strictly decreasing in SNR; underflows to exactly 0.0 well before 30 dB.
pub fn bit_error_rate(snr_db: f64) -> f64 {
    0.5 * (-snr_linear(snr_db)).exp()
}

/// Point-in-time link quality metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkMetrics {
    pub ber: f64,
    pub throughput_bps: f64,
    pub delay_ms: f64,
    pub jitter_ms: f64,
    pub packet_loss_pct: f64,
}

/// Evaluate all link metrics for the given SNR and data rate.
///
/// Delay and jitter include uniform noise from the injected RNG by design
/// (illustrative variation, not a reproducibility concern for callers that
/// seed the RNG).
pub fn evaluate<R: Rng + ?Sized>(
    snr_db: f64,
    data_rate_bps: f64,
    rng: &mut R,
) -> Result<LinkMetrics, SampleError> {
    let ber = bit_error_rate(snr_db);
    let scale = snr_db + 1.0;

    let delay_ms = uniform(DELAY_RANGE_MS)?.sample(rng) / scale;
    let jitter_ms = uniform(JITTER_RANGE_MS)?.sample(rng) / scale;

    Ok(LinkMetrics {
        ber,
        throughput_bps: data_rate_bps * (1.0 - ber),
        delay_ms,
        jitter_ms,
        packet_loss_pct: ber * 100.0,
    })
}

/// Reference BER-vs-SNR curve: `points` evenly spaced SNR values over the
/// sweep range with their BER, for the log-scale plot.
pub fn ber_curve(points: usize) -> Vec<(f64, f64)> {
    let (lo, hi) = BER_CURVE_SNR_DB;
    let span = hi - lo;
    let last = points.saturating_sub(1).max(1) as f64;

    (0..points)
        .map(|i| {
            let snr = lo + span * i as f64 / last;
            (snr, bit_error_rate(snr))
        })
        .collect()
}

fn uniform((low, high): (f64, f64)) -> Result<Uniform<f64>, SampleError> {
    Uniform::new(low, high).map_err(|_| SampleError::InvalidUniform { low, high })
}
