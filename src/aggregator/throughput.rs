//! Throughput result and its conversions.

use crate::parser::schema::{ObservationWindow, ThroughputReport};
use crate::utils::config::{BITS_PER_BYTE, SCHEMA_VERSION};

/// Throughput over a well-defined observation window
///
/// **Public** - returned from `WindowAggregator::finish`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    /// Total RX bytes divided by the window duration
    pub bytes_per_second: f64,

    /// Earliest TX time (window start), seconds
    pub min_tx_time: f64,

    /// Latest RX time (window end), seconds
    pub max_rx_time: f64,

    /// Window duration, always > 0
    pub window_seconds: f64,

    /// Sum of all RX byte counts
    pub total_rx_bytes: u64,

    pub tx_events: u64,
    pub rx_events: u64,
}

impl Throughput {
    pub fn bits_per_second(&self) -> f64 {
        self.bytes_per_second * BITS_PER_BYTE
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Window: {:.6}s..{:.6}s ({:.6}s) | RX bytes: {} | TX: {} | RX: {}",
            self.min_tx_time,
            self.max_rx_time,
            self.window_seconds,
            self.total_rx_bytes,
            self.tx_events,
            self.rx_events
        )
    }

    /// Convert to the JSON report format
    ///
    /// # Arguments
    /// * `source` - Trace log path, recorded for reference
    /// * `dropped_lines` - Marker lines skipped during the scan
    pub fn to_report(&self, source: &str, dropped_lines: u64) -> ThroughputReport {
        use chrono::Utc;

        ThroughputReport {
            version: SCHEMA_VERSION.to_string(),
            source: source.to_string(),
            throughput_bytes_per_second: self.bytes_per_second,
            throughput_bits_per_second: self.bits_per_second(),
            window: ObservationWindow {
                start_seconds: self.min_tx_time,
                end_seconds: self.max_rx_time,
                duration_seconds: self.window_seconds,
            },
            total_rx_bytes: self.total_rx_bytes,
            tx_events: self.tx_events,
            rx_events: self.rx_events,
            dropped_lines,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}
