//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Reasons the observation window cannot produce a throughput value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThroughputError {
    #[error(
        "Not enough TX or RX records to calculate throughput \
         ({tx_events} TX, {rx_events} RX)"
    )]
    InsufficientRecords { tx_events: u64, rx_events: u64 },

    #[error(
        "Latest RX time ({latest_rx}s) is not after the earliest TX time ({earliest_tx}s)"
    )]
    DegenerateWindow { earliest_tx: f64, latest_rx: f64 },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
