//! Event types extracted from trace log lines.
//!
//! Events are ephemeral: the scanner yields them one at a time and the
//! aggregator folds them into running values immediately.

/// Which record shape a line carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Packet transmission (`TraceDelay TX`)
    Tx,
    /// Packet reception (`TraceDelay: RX`)
    Rx,
}

/// A packet transmission, timestamped in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TxEvent {
    pub time_seconds: f64,
}

/// A packet reception, timestamped in seconds, with its payload size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RxEvent {
    pub time_seconds: f64,
    pub byte_count: u64,
}

/// A classified and extracted trace record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceEvent {
    Tx(TxEvent),
    Rx(RxEvent),
}

impl TraceEvent {
    pub fn kind(&self) -> RecordKind {
        match self {
            TraceEvent::Tx(_) => RecordKind::Tx,
            TraceEvent::Rx(_) => RecordKind::Rx,
        }
    }

    pub fn time_seconds(&self) -> f64 {
        match self {
            TraceEvent::Tx(tx) => tx.time_seconds,
            TraceEvent::Rx(rx) => rx.time_seconds,
        }
    }
}
