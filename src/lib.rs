//! Trace Throughput
//!
//! Aggregate throughput analysis for ns-3 `TraceDelay` simulation logs.
//!
//! The log is scanned once: TX and RX records are picked out by marker,
//! their timestamps (and RX byte counts) extracted, and throughput computed
//! as total RX bytes over the window from the earliest TX to the latest RX.
//!
//! ## Getting Started
//!
//! ```bash
//! trace-throughput analyze size1500.log
//! trace-throughput --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
