//! Chart rendering for the dashboard screens.
//!
//! `spectrum` holds the static OFDMA and scheduling plots, `curves` the
//! Chart-widget line plots (BER reference curve and the live monitor panels).

pub mod curves;
pub mod spectrum;

/// Min/max of a value series, with a fallback for empty input.
pub fn value_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        (0.0, 1.0)
    } else {
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_bounds() {
        let (min, max) = value_bounds([3.0, 1.0, 2.0].into_iter());
        assert_eq!(min, 1.0);
        assert_eq!(max, 3.0);
    }

    #[test]
    fn test_value_bounds_empty() {
        let (min, max) = value_bounds(std::iter::empty());
        assert_eq!((min, max), (0.0, 1.0));
    }
}
