//! Running aggregates over the event stream.
//!
//! The window runs from the earliest TX time to the latest RX time. The byte
//! total is NOT restricted to that window: every RX record contributes,
//! whatever its timestamp.

use super::throughput::Throughput;
use crate::parser::TraceEvent;
use crate::utils::error::ThroughputError;
use log::debug;
use std::cmp::Ordering;

/// Folds TX/RX events into min TX time, max RX time and total RX bytes
#[derive(Debug, Clone, Default)]
pub struct WindowAggregator {
    min_tx_time: Option<f64>,
    max_rx_time: Option<f64>,
    total_rx_bytes: u64,
    tx_events: u64,
    rx_events: u64,
}

impl WindowAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a single event into the running values
    pub fn observe(&mut self, event: &TraceEvent) {
        match event {
            TraceEvent::Tx(tx) => {
                self.tx_events += 1;
                self.min_tx_time = Some(match self.min_tx_time {
                    Some(current) => current.min(tx.time_seconds),
                    None => tx.time_seconds,
                });
            }
            TraceEvent::Rx(rx) => {
                self.rx_events += 1;
                // Capped at u64::MAX rather than wrapping
                self.total_rx_bytes = match self.total_rx_bytes.checked_add(rx.byte_count) {
                    Some(total) => total,
                    None => {
                        debug!("RX byte total overflowed u64, capping at {}", u64::MAX);
                        u64::MAX
                    }
                };
                self.max_rx_time = Some(match self.max_rx_time {
                    Some(current) => current.max(rx.time_seconds),
                    None => rx.time_seconds,
                });
            }
        }
    }

    pub fn min_tx_time(&self) -> Option<f64> {
        self.min_tx_time
    }

    pub fn max_rx_time(&self) -> Option<f64> {
        self.max_rx_time
    }

    pub fn total_rx_bytes(&self) -> u64 {
        self.total_rx_bytes
    }

    pub fn tx_events(&self) -> u64 {
        self.tx_events
    }

    pub fn rx_events(&self) -> u64 {
        self.rx_events
    }

    /// Evaluate the window once the scan is complete
    ///
    /// # Errors
    /// * `ThroughputError::InsufficientRecords` - no TX or no RX events seen
    /// * `ThroughputError::DegenerateWindow` - latest RX is not after earliest TX
    pub fn finish(&self) -> Result<Throughput, ThroughputError> {
        let (Some(earliest_tx), Some(latest_rx)) = (self.min_tx_time, self.max_rx_time) else {
            return Err(ThroughputError::InsufficientRecords {
                tx_events: self.tx_events,
                rx_events: self.rx_events,
            });
        };

        // NaN bounds compare as None and count as degenerate
        if latest_rx.partial_cmp(&earliest_tx) != Some(Ordering::Greater) {
            return Err(ThroughputError::DegenerateWindow {
                earliest_tx,
                latest_rx,
            });
        }

        let window_seconds = latest_rx - earliest_tx;
        let bytes_per_second = self.total_rx_bytes as f64 / window_seconds;

        debug!(
            "Window {:.9}s..{:.9}s ({:.9}s), {} bytes",
            earliest_tx, latest_rx, window_seconds, self.total_rx_bytes
        );

        Ok(Throughput {
            bytes_per_second,
            min_tx_time: earliest_tx,
            max_rx_time: latest_rx,
            window_seconds,
            total_rx_bytes: self.total_rx_bytes,
            tx_events: self.tx_events,
            rx_events: self.rx_events,
        })
    }
}

/// Aggregate an event sequence in one pass
pub fn aggregate_events<'a, I>(events: I) -> WindowAggregator
where
    I: IntoIterator<Item = &'a TraceEvent>,
{
    let mut aggregator = WindowAggregator::new();
    for event in events {
        aggregator.observe(event);
    }
    aggregator
}
