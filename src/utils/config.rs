//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Record markers emitted by the ns-3 TraceDelay sinks.
// TX is checked before RX, so a line carrying both counts as TX.
pub const TX_MARKER: &str = "TraceDelay TX";
pub const RX_MARKER: &str = "TraceDelay: RX";

// RX timestamps are logged in nanoseconds, TX timestamps in seconds
pub const NANOS_PER_SECOND: f64 = 1e9;

pub const BITS_PER_BYTE: f64 = 8.0;
