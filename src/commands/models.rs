use crate::utils::config::BITS_PER_BYTE;
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Trace log to scan
    pub trace_log: PathBuf,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print window/event summary to stdout
    pub print_summary: bool,

    /// Show the rate in bits per second
    pub bits: bool,
}

/// Helper for formatting a byte rate for display.
pub struct RateDisplay {
    pub use_bits: bool,
}

impl RateDisplay {
    pub fn new(use_bits: bool) -> Self {
        Self { use_bits }
    }

    pub fn format(&self, bytes_per_second: f64) -> f64 {
        if self.use_bits {
            bytes_per_second * BITS_PER_BYTE
        } else {
            bytes_per_second
        }
    }

    pub fn unit(&self) -> &'static str {
        if self.use_bits {
            "bits/s"
        } else {
            "bytes/s"
        }
    }
}
