//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Opens the trace log
//! 2. Scans it line by line into TX/RX events
//! 3. Aggregates the observation window and RX byte total
//! 4. Prints the throughput (or a diagnostic)
//! 5. Optionally writes a JSON report

use crate::aggregator::{Throughput, WindowAggregator};
use crate::commands::models::{AnalyzeArgs, RateDisplay};
use crate::output::{validate_path, write_report};
use crate::parser::{open_trace, ScanStats};
use crate::utils::error::ThroughputError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Result of one scan over a trace log
#[derive(Debug, Clone)]
pub struct TraceAnalysis {
    /// Throughput, or why the window is not usable
    pub outcome: Result<Throughput, ThroughputError>,

    /// Line counters from the scan
    pub stats: ScanStats,
}

impl TraceAnalysis {
    /// Throughput in bytes/s, 0.0 when the window is not usable
    pub fn bytes_per_second(&self) -> f64 {
        self.outcome
            .as_ref()
            .map(|t| t.bytes_per_second)
            .unwrap_or(0.0)
    }
}

/// Scan a trace log and aggregate it
///
/// **Public** - shared by `calculate_throughput` and `execute_analyze`
///
/// # Errors
/// * The file cannot be opened or read
///
/// Malformed lines and an unusable window are not errors here; the latter is
/// reported through `TraceAnalysis::outcome`.
pub fn analyze_trace(path: impl AsRef<Path>) -> Result<TraceAnalysis> {
    let path = path.as_ref();

    let mut events = open_trace(path)
        .with_context(|| format!("Failed to open trace log {}", path.display()))?;

    let mut aggregator = WindowAggregator::new();
    for event in events.by_ref() {
        let event =
            event.with_context(|| format!("Failed to read trace log {}", path.display()))?;
        aggregator.observe(&event);
    }

    let stats = events.stats();
    debug!(
        "Scanned {} lines: {} TX, {} RX, {} dropped",
        stats.lines_read, stats.tx_lines, stats.rx_lines, stats.dropped_lines
    );

    Ok(TraceAnalysis {
        outcome: aggregator.finish(),
        stats,
    })
}

/// Compute throughput for a trace log, in bytes/s
///
/// **Public** - the plain computation without report output
///
/// Prints a diagnostic and returns 0.0 when there are no TX or no RX records,
/// or when the latest RX time does not exceed the earliest TX time.
pub fn calculate_throughput(path: impl AsRef<Path>) -> Result<f64> {
    let analysis = analyze_trace(path)?;
    if let Err(reason) = &analysis.outcome {
        report_failure(reason);
    }
    Ok(analysis.bytes_per_second())
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The throughput in bytes/s (0.0 if the window is not usable)
///
/// # Errors
/// * Trace log cannot be opened or read
/// * Report file cannot be written
pub fn execute_analyze(args: AnalyzeArgs) -> Result<f64> {
    let start_time = Instant::now();

    info!("Analyzing trace log: {}", args.trace_log.display());
    let analysis = analyze_trace(&args.trace_log)?;

    let throughput = match &analysis.outcome {
        Ok(throughput) => *throughput,
        Err(reason) => {
            report_failure(reason);
            println!("{}", FALLBACK_LINE);
            return Ok(0.0);
        }
    };

    info!("{}", throughput.summary());

    let display = RateDisplay::new(args.bits);
    println!("{}", result_line(throughput.bytes_per_second, &display));

    if args.print_summary {
        print_summary(&args, &throughput, &analysis.stats, &display);
    }

    if let Some(output) = &args.output_json {
        let source = args.trace_log.display().to_string();
        let report = throughput.to_report(&source, analysis.stats.dropped_lines);
        write_report(&report, output).context("Failed to write throughput report")?;
        info!("✓ Report written to: {}", output.display());
    }

    info!(
        "Analysis completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(throughput.bytes_per_second)
}

/// Printed instead of a rate when nothing positive was measured
pub const FALLBACK_LINE: &str = "Throughput calculation failed or 0 bytes/s";

/// Final stdout line for a computed rate
///
/// A rate of zero or less (e.g. RX records without byte counts) gets the
/// fallback line rather than `0.00 bytes/s`.
pub fn result_line(bytes_per_second: f64, display: &RateDisplay) -> String {
    if bytes_per_second > 0.0 {
        format!(
            "Total throughput: {:.2} {}",
            display.format(bytes_per_second),
            display.unit()
        )
    } else {
        FALLBACK_LINE.to_string()
    }
}

/// Print the window-level diagnostic.
///
/// **Private** - internal helper
fn report_failure(reason: &ThroughputError) {
    debug!("Throughput not computed: {:?}", reason);
    println!("{}", reason);
}

/// Print a human-readable summary to stdout.
///
/// **Private** - internal helper for execute_analyze
fn print_summary(
    args: &AnalyzeArgs,
    throughput: &Throughput,
    stats: &ScanStats,
    display: &RateDisplay,
) {
    println!();
    println!("  Trace log:     {}", args.trace_log.display());
    println!(
        "  Window:        {:.6}s -> {:.6}s ({:.6}s)",
        throughput.min_tx_time, throughput.max_rx_time, throughput.window_seconds
    );
    println!("  RX bytes:      {}", throughput.total_rx_bytes);
    println!(
        "  Events:        {} TX, {} RX",
        throughput.tx_events, throughput.rx_events
    );
    println!(
        "  Lines:         {} read, {} dropped",
        stats.lines_read, stats.dropped_lines
    );
    println!(
        "  Throughput:    {:.2} {}",
        display.format(throughput.bytes_per_second),
        display.unit()
    );
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.trace_log.as_os_str().is_empty() {
        anyhow::bail!("Trace log path cannot be empty");
    }

    if args.trace_log.is_dir() {
        anyhow::bail!(
            "Trace log path is a directory: {}",
            args.trace_log.display()
        );
    }

    if let Some(output) = &args.output_json {
        validate_path(output).context("Invalid report output path")?;
    }

    Ok(())
}
