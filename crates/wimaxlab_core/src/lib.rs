//! WiMAX textbook formula library
//!
//! This crate provides the pure computational layer behind the `wimaxlab`
//! terminal dashboard. Everything is a closed-form textbook formula:
//! - Friis/path-loss coverage range estimation
//! - Spectral efficiency and approximate data rate per modulation scheme
//! - QoS service class descriptors (UGS, rtPS, nrtPS, BE)
//! - A static OFDMA subcarrier allocation map
//! - An illustrative weighted slot schedule
//! - SNR-derived link quality metrics (BER, throughput, delay, jitter, PLR)
//! - A 30-step live monitoring state machine
//!
//! All randomized helpers take an injected `Rng` so callers (and tests) control
//! reproducibility; nothing here reads ambient randomness or global state.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod controls;
pub mod coverage;
pub mod error;
pub mod link;
pub mod modulation;
pub mod monitor;
pub mod ofdm;
pub mod qos;
pub mod schedule;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use controls::ControlSnapshot;
pub use link::LinkMetrics;
pub use modulation::Modulation;
pub use monitor::{Monitor, MonitorSample, MonitorState};
pub use qos::QosClass;
