//! Output JSON schema definitions for throughput reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThroughputReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace log the report was computed from
    pub source: String,

    /// Total received bytes divided by the window duration
    pub throughput_bytes_per_second: f64,

    /// Same rate expressed in bits
    pub throughput_bits_per_second: f64,

    /// Observation window (earliest TX to latest RX)
    pub window: ObservationWindow,

    /// Sum of every RX byte count in the log
    pub total_rx_bytes: u64,

    pub tx_events: u64,
    pub rx_events: u64,

    /// Marker lines skipped because their fields did not parse
    pub dropped_lines: u64,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// Time bounds used as the throughput denominator, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationWindow {
    pub start_seconds: f64,
    pub end_seconds: f64,
    pub duration_seconds: f64,
}
