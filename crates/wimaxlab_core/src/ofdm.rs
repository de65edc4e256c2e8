//! Static OFDMA subcarrier allocation map.
//!
//! Purely illustrative: 64 subcarriers indexed −32..=31 with every 4th carrier
//! allocated at unit power. No baseband processing happens anywhere.

/// Number of subcarriers in the illustrative FFT.
pub const SUBCARRIER_COUNT: usize = 64;

/// Every Nth subcarrier is allocated.
pub const ALLOCATION_SPACING: usize = 4;

/// One subcarrier in the allocation map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subcarrier {
    /// Index relative to the carrier center (−32..=31)
    pub index: i32,
    /// Allocated power (1.0 active, 0.0 idle)
    pub power: f64,
}

impl Subcarrier {
    pub fn is_active(&self) -> bool {
        self.power > 0.0
    }
}

/// Build the fixed allocation map.
pub fn subcarrier_allocation() -> Vec<Subcarrier> {
    let half = SUBCARRIER_COUNT as i32 / 2;
    (0..SUBCARRIER_COUNT)
        .map(|i| Subcarrier {
            index: i as i32 - half,
            power: if i % ALLOCATION_SPACING == 0 { 1.0 } else { 0.0 },
        })
        .collect()
}
