//! WiMAX service classes and their qualitative QoS expectations.
//!
//! The ratings are a fixed textbook lookup table, not computed values. The
//! table is exhaustive over exactly the four 802.16 scheduling service classes.

/// The four WiMAX scheduling service classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QosClass {
    /// Unsolicited Grant Service
    Ugs,
    /// Real-Time Polling Service
    RtPs,
    /// Non-Real-Time Polling Service
    NrtPs,
    /// Best Effort
    Be,
}

/// Qualitative rating table for one service class (five fixed entries).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QosRatings {
    pub delay: &'static str,
    pub jitter: &'static str,
    pub throughput: &'static str,
    pub ber: &'static str,
    pub plr: &'static str,
}

impl QosRatings {
    /// The table as labeled rows, in display order.
    pub fn rows(&self) -> [(&'static str, &'static str); 5] {
        [
            ("Delay", self.delay),
            ("Jitter", self.jitter),
            ("Throughput", self.throughput),
            ("BER", self.ber),
            ("PLR", self.plr),
        ]
    }
}

impl QosClass {
    pub const ALL: [QosClass; 4] = [QosClass::Ugs, QosClass::RtPs, QosClass::NrtPs, QosClass::Be];

    pub fn name(&self) -> &'static str {
        match self {
            QosClass::Ugs => "UGS",
            QosClass::RtPs => "rtPS",
            QosClass::NrtPs => "nrtPS",
            QosClass::Be => "BE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QosClass::Ugs => {
                "Unsolicited Grant Service: Low delay, constant bit rate (e.g. VoIP)"
            }
            QosClass::RtPs => "Real-Time Polling Service: Variable rate, real-time (e.g. video)",
            QosClass::NrtPs => "Non-Real-Time Polling Service: Bursty traffic (e.g. FTP)",
            QosClass::Be => "Best Effort: No guarantee (e.g. web browsing)",
        }
    }

    pub fn ratings(&self) -> QosRatings {
        match self {
            QosClass::Ugs => QosRatings {
                delay: "Very Low",
                jitter: "Low",
                throughput: "High",
                ber: "Low",
                plr: "Very Low",
            },
            QosClass::RtPs => QosRatings {
                delay: "Low",
                jitter: "Medium",
                throughput: "Medium-High",
                ber: "Medium",
                plr: "Low",
            },
            QosClass::NrtPs => QosRatings {
                delay: "High",
                jitter: "Medium",
                throughput: "Medium",
                ber: "Medium",
                plr: "Medium",
            },
            QosClass::Be => QosRatings {
                delay: "Variable",
                jitter: "Variable",
                throughput: "Low-Medium",
                ber: "High",
                plr: "High",
            },
        }
    }

    pub fn next(&self) -> Self {
        match self {
            QosClass::Ugs => QosClass::RtPs,
            QosClass::RtPs => QosClass::NrtPs,
            QosClass::NrtPs => QosClass::Be,
            QosClass::Be => QosClass::Ugs,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            QosClass::Ugs => QosClass::Be,
            QosClass::RtPs => QosClass::Ugs,
            QosClass::NrtPs => QosClass::RtPs,
            QosClass::Be => QosClass::NrtPs,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            QosClass::Ugs => 0,
            QosClass::RtPs => 1,
            QosClass::NrtPs => 2,
            QosClass::Be => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_total() {
        for class in QosClass::ALL {
            assert!(!class.name().is_empty());
            assert!(!class.description().is_empty());
            let rows = class.ratings().rows();
            assert_eq!(rows.len(), 5);
            for (label, value) in rows {
                assert!(!label.is_empty());
                assert!(!value.is_empty());
            }
        }
    }

    #[test]
    fn test_exactly_four_classes() {
        assert_eq!(QosClass::ALL.len(), 4);
        for (i, class) in QosClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
        }
    }

    #[test]
    fn test_ugs_table_matches_textbook() {
        let r = QosClass::Ugs.ratings();
        assert_eq!(r.delay, "Very Low");
        assert_eq!(r.plr, "Very Low");
    }
}
