//! Aggregation of trace events into a throughput figure.
//!
//! This module transforms the parsed event stream into:
//! - Observation window bounds (earliest TX, latest RX)
//! - Total received bytes
//! - Throughput over the window

pub mod throughput;
pub mod window;

// Re-export main types and functions
pub use throughput::Throughput;
pub use window::{aggregate_events, WindowAggregator};
