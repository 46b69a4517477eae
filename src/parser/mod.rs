//! Trace log parsing and schema definitions.
//!
//! This module handles:
//! - Classifying TX and RX record lines
//! - Extracting timestamps and byte counts
//! - Defining output schema

pub mod event;
pub mod schema;
pub mod trace_log;

// Re-export main types
pub use event::{RecordKind, RxEvent, TraceEvent, TxEvent};
pub use schema::{ObservationWindow, ThroughputReport};
pub use trace_log::{classify_line, open_trace, parse_line, ScanStats, TraceEvents};
