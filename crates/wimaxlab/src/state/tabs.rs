/// Tab identifiers for the TUI application.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Coverage,
    Spectral,
    Qos,
    Ofdm,
    LinkMetrics,
    Monitor,
}

impl TabId {
    pub const ALL: [TabId; 6] = [
        TabId::Coverage,
        TabId::Spectral,
        TabId::Qos,
        TabId::Ofdm,
        TabId::LinkMetrics,
        TabId::Monitor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Coverage => "Coverage",
            TabId::Spectral => "Spectral Efficiency",
            TabId::Qos => "QoS Classes",
            TabId::Ofdm => "OFDM & Scheduling",
            TabId::LinkMetrics => "Link Metrics",
            TabId::Monitor => "Live Monitor",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Coverage => 0,
            TabId::Spectral => 1,
            TabId::Qos => 2,
            TabId::Ofdm => 3,
            TabId::LinkMetrics => 4,
            TabId::Monitor => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TabId::Coverage),
            1 => Some(TabId::Spectral),
            2 => Some(TabId::Qos),
            3 => Some(TabId::Ofdm),
            4 => Some(TabId::LinkMetrics),
            5 => Some(TabId::Monitor),
            _ => None,
        }
    }
}
