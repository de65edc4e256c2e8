pub mod coverage;
pub mod link_metrics;
pub mod monitor;
pub mod ofdm;
pub mod qos;
pub mod spectral;

use crate::components::Component;

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}
