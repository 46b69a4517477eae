//! Line-oriented parser for ns-3 TraceDelay logs.
//!
//! Each line is classified by marker substring, then the fields for that
//! record shape are pulled out with regular expressions. Lines that carry a
//! marker but not the expected fields are dropped without error: the log is
//! scanned best-effort, not validated.

use super::event::{RecordKind, RxEvent, TraceEvent, TxEvent};
use crate::utils::config::{NANOS_PER_SECOND, RX_MARKER, TX_MARKER};
use log::debug;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

// Unsigned decimal with optional fraction and exponent: 1, 1.5, .5, 2.0e+09, 1.5e-3
const NUMBER: &str = r"(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?";

static TX_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"Time:\s*\+({NUMBER})s")).expect("valid TX time pattern")
});

static RX_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"RXtime:\s*\+({NUMBER})ns")).expect("valid RX time pattern")
});

static BYTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*bytes").expect("valid byte count pattern"));

/// Classify a line as a TX or RX record by its marker
///
/// TX is tested first, so a line containing both markers counts as TX.
pub fn classify_line(line: &str) -> Option<RecordKind> {
    if line.contains(TX_MARKER) {
        Some(RecordKind::Tx)
    } else if line.contains(RX_MARKER) {
        Some(RecordKind::Rx)
    } else {
        None
    }
}

/// Extract the `Time: +<n>s` field of a TX line, in seconds
pub fn parse_time_tx(line: &str) -> Option<f64> {
    capture_number(&TX_TIME_RE, line)
}

/// Extract the `RXtime: +<n>ns` field of an RX line, converted to seconds
pub fn parse_time_rx(line: &str) -> Option<f64> {
    capture_number(&RX_TIME_RE, line).map(|nanos| nanos / NANOS_PER_SECOND)
}

/// Extract the `<n> bytes` field, defaulting to 0 when absent
pub fn parse_bytes(line: &str) -> u64 {
    BYTES_RE
        .captures(line)
        .and_then(|caps| caps[1].parse::<u64>().ok())
        .unwrap_or(0)
}

fn capture_number(re: &Regex, line: &str) -> Option<f64> {
    re.captures(line).and_then(|caps| caps[1].parse::<f64>().ok())
}

/// Extract the event for an already classified line
///
/// Returns `None` when the record's time field is missing. An RX line keeps
/// its event with 0 bytes when only the byte count is missing.
pub fn extract_event(kind: RecordKind, line: &str) -> Option<TraceEvent> {
    match kind {
        RecordKind::Tx => {
            parse_time_tx(line).map(|time_seconds| TraceEvent::Tx(TxEvent { time_seconds }))
        }
        RecordKind::Rx => parse_time_rx(line).map(|time_seconds| {
            TraceEvent::Rx(RxEvent {
                time_seconds,
                byte_count: parse_bytes(line),
            })
        }),
    }
}

/// Classify and extract a single line
pub fn parse_line(line: &str) -> Option<TraceEvent> {
    classify_line(line).and_then(|kind| extract_event(kind, line))
}

/// Line counters gathered while scanning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_read: u64,
    pub tx_lines: u64,
    pub rx_lines: u64,
    /// Marker lines whose fields did not match
    pub dropped_lines: u64,
}

/// Lazy, file-ordered iterator of trace events
///
/// Reads one line at a time; invalid UTF-8 is decoded lossily so a stray
/// byte never aborts the scan.
pub struct TraceEvents<R> {
    reader: R,
    buf: Vec<u8>,
    stats: ScanStats,
}

impl<R: BufRead> TraceEvents<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            stats: ScanStats::default(),
        }
    }

    /// Counters for the lines consumed so far
    pub fn stats(&self) -> ScanStats {
        self.stats
    }
}

impl<R: BufRead> Iterator for TraceEvents<R> {
    type Item = io::Result<TraceEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
            self.stats.lines_read += 1;

            let line = String::from_utf8_lossy(&self.buf);
            let line = line.trim();

            let Some(kind) = classify_line(line) else {
                continue;
            };
            match kind {
                RecordKind::Tx => self.stats.tx_lines += 1,
                RecordKind::Rx => self.stats.rx_lines += 1,
            }

            match extract_event(kind, line) {
                Some(event) => return Some(Ok(event)),
                None => self.stats.dropped_lines += 1,
            }
        }
    }
}

/// Open a trace log for scanning
///
/// The file handle lives inside the returned iterator and is closed when it
/// is dropped.
pub fn open_trace(path: impl AsRef<Path>) -> io::Result<TraceEvents<BufReader<File>>> {
    let path = path.as_ref();
    debug!("Opening trace log: {}", path.display());
    let file = File::open(path)?;
    Ok(TraceEvents::new(BufReader::new(file)))
}
