//! Illustrative slot scheduling.
//!
//! Draws independent categorical samples over the four service classes with
//! fixed probabilities. This is a random label generator for the scheduling
//! strip chart, not a scheduling algorithm: no queues, no priorities, no state
//! carried between slots.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::error::SampleError;
use crate::qos::QosClass;

/// Number of slots in the illustrative downlink frame.
pub const SLOT_COUNT: usize = 20;

/// Draw probability per class, in `QosClass::ALL` order (UGS, rtPS, nrtPS, BE).
pub const CLASS_WEIGHTS: [f64; 4] = [0.3, 0.3, 0.2, 0.2];

/// Sample a full frame of slot assignments. Draws are independent, so classes
/// can repeat freely.
pub fn sample_schedule<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<QosClass>, SampleError> {
    let dist = WeightedIndex::new(CLASS_WEIGHTS)
        .map_err(|_| SampleError::InvalidWeights { what: "slot classes" })?;

    Ok((0..SLOT_COUNT)
        .map(|_| QosClass::ALL[dist.sample(rng)])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_schedule_length_and_membership() {
        let mut rng = StdRng::seed_from_u64(42);
        let schedule = sample_schedule(&mut rng).unwrap();
        assert_eq!(schedule.len(), SLOT_COUNT);
        for slot in &schedule {
            assert!(QosClass::ALL.contains(slot));
        }
    }

    #[test]
    fn test_schedule_reproducible_with_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(sample_schedule(&mut a).unwrap(), sample_schedule(&mut b).unwrap());
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = CLASS_WEIGHTS.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(CLASS_WEIGHTS.len(), QosClass::ALL.len());
    }

    #[test]
    fn test_heavy_classes_dominate_in_the_long_run() {
        // UGS+rtPS carry 60% of the weight; over many frames they should win.
        let mut rng = StdRng::seed_from_u64(123);
        let mut realtime = 0usize;
        let mut total = 0usize;
        for _ in 0..200 {
            for slot in sample_schedule(&mut rng).unwrap() {
                if matches!(slot, QosClass::Ugs | QosClass::RtPs) {
                    realtime += 1;
                }
                total += 1;
            }
        }
        let share = realtime as f64 / total as f64;
        assert!(share > 0.5 && share < 0.7, "realtime share {share}");
    }
}
