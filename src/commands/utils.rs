use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path).context("Failed to read throughput report")?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!(
        "  Throughput: {:.2} bytes/s",
        report.throughput_bytes_per_second
    );
    println!(
        "  Window: {:.6}s ({:.6}s -> {:.6}s)",
        report.window.duration_seconds, report.window.start_seconds, report.window.end_seconds
    );
    println!("  RX Bytes: {}", report.total_rx_bytes);
    println!("  Events: {} TX, {} RX", report.tx_events, report.rx_events);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Trace Throughput Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string                      - Schema version (e.g., '1.0.0')");
        println!("  source: string                       - Trace log path");
        println!("  throughput_bytes_per_second: number  - RX bytes / window duration");
        println!("  throughput_bits_per_second: number   - Same rate in bits");
        println!("  window: object                       - Observation window");
        println!("    start_seconds: number              - Earliest TX time");
        println!("    end_seconds: number                - Latest RX time");
        println!("    duration_seconds: number           - end - start");
        println!("  total_rx_bytes: number               - Sum of all RX byte counts");
        println!("  tx_events: number                    - TX records parsed");
        println!("  rx_events: number                    - RX records parsed");
        println!("  dropped_lines: number                - Marker lines without fields");
        println!("  generated_at: string                 - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Trace Throughput v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Aggregate throughput analysis for ns-3 TraceDelay logs.");
}
