use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::NamedTempFile;
use trace_throughput::commands::{
    analyze_trace, calculate_throughput, execute_analyze, result_line, validate_args,
    AnalyzeArgs, RateDisplay, FALLBACK_LINE,
};
use trace_throughput::output::read_report;
use trace_throughput::utils::error::ThroughputError;

fn write_log(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

const TX_1S: &str = "+1.0s 0 TraceDelay TX 1500 bytes to 10.1.2.4 Uid: 0 Time: +1.000000s";
const RX_2S: &str =
    "+2.0s 7 TraceDelay: RX 1500 bytes from 10.1.3.1 Sequence Number: 0 RXtime: +2000000000ns";

#[test]
fn test_two_line_scenario() {
    let log = write_log(&[TX_1S, RX_2S]);

    let analysis = analyze_trace(log.path()).unwrap();
    let throughput = analysis.outcome.clone().unwrap();

    assert_eq!(throughput.min_tx_time, 1.0);
    assert_eq!(throughput.max_rx_time, 2.0);
    assert_eq!(throughput.total_rx_bytes, 1500);
    assert_eq!(format!("{:.2}", analysis.bytes_per_second()), "1500.00");
}

#[test]
fn test_calculate_throughput_matches_formula() {
    let log = write_log(&[
        "TraceDelay TX Time: +0.5s",
        "TraceDelay TX Time: +0.25s",
        "TraceDelay: RX RXtime: +1000000000ns 1000 bytes",
        "TraceDelay: RX RXtime: +4250000000ns 3000 bytes",
        "unrelated line",
    ]);

    let rate = calculate_throughput(log.path()).unwrap();
    assert!((rate - 4000.0 / 4.0).abs() < 1e-9);
}

#[test]
fn test_calculate_throughput_is_idempotent() {
    let log = write_log(&[TX_1S, RX_2S, "TraceDelay: RX RXtime: +1500000000ns 700 bytes"]);

    let first = calculate_throughput(log.path()).unwrap();
    let second = calculate_throughput(log.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_tx_only_returns_zero() {
    let log = write_log(&[TX_1S, "TraceDelay TX Time: +2.0s"]);

    let analysis = analyze_trace(log.path()).unwrap();
    assert!(matches!(
        analysis.outcome,
        Err(ThroughputError::InsufficientRecords {
            tx_events: 2,
            rx_events: 0
        })
    ));
    assert_eq!(calculate_throughput(log.path()).unwrap(), 0.0);
}

#[test]
fn test_equal_window_returns_zero() {
    let log = write_log(&[
        "TraceDelay TX Time: +2.0s",
        "TraceDelay: RX RXtime: +2000000000ns 1500 bytes",
    ]);

    let analysis = analyze_trace(log.path()).unwrap();
    assert!(matches!(
        analysis.outcome,
        Err(ThroughputError::DegenerateWindow { .. })
    ));
    assert_eq!(calculate_throughput(log.path()).unwrap(), 0.0);
}

#[test]
fn test_malformed_marker_lines_are_skipped() {
    let log = write_log(&[
        "TraceDelay TX TraceDelay: RX no numbers here",
        "TraceDelay: RX 1500 bytes",
        TX_1S,
        RX_2S,
    ]);

    let analysis = analyze_trace(log.path()).unwrap();
    assert_eq!(analysis.stats.dropped_lines, 2);
    assert_eq!(analysis.stats.lines_read, 4);
    assert!((analysis.bytes_per_second() - 1500.0).abs() < 1e-9);
}

#[test]
fn test_missing_file_is_an_error() {
    let missing = tempfile::tempdir().unwrap().path().join("missing.log");
    let err = calculate_throughput(&missing).unwrap_err();
    assert!(err.to_string().contains("Failed to open trace log"));
}

#[test]
fn test_execute_analyze_writes_report() {
    let log = write_log(&[TX_1S, RX_2S]);
    let out_dir = tempfile::tempdir().unwrap();
    let report_path = out_dir.path().join("reports/throughput.json");

    let args = AnalyzeArgs {
        trace_log: log.path().to_path_buf(),
        output_json: Some(report_path.clone()),
        print_summary: true,
        bits: false,
    };

    let rate = execute_analyze(args).unwrap();
    assert!((rate - 1500.0).abs() < 1e-9);

    let report = read_report(&report_path).unwrap();
    assert_eq!(report.total_rx_bytes, 1500);
    assert_eq!(report.tx_events, 1);
    assert_eq!(report.rx_events, 1);
}

#[test]
fn test_execute_analyze_skips_report_on_failure() {
    let log = write_log(&[TX_1S]);
    let out_dir = tempfile::tempdir().unwrap();
    let report_path = out_dir.path().join("throughput.json");

    let args = AnalyzeArgs {
        trace_log: log.path().to_path_buf(),
        output_json: Some(report_path.clone()),
        ..Default::default()
    };

    assert_eq!(execute_analyze(args).unwrap(), 0.0);
    assert!(!report_path.exists());
}

#[test]
fn test_validate_args_empty_path() {
    let args = AnalyzeArgs::default();
    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_directory_path() {
    let dir = tempfile::tempdir().unwrap();
    let args = AnalyzeArgs {
        trace_log: dir.path().to_path_buf(),
        ..Default::default()
    };
    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_output_is_directory() {
    let dir = tempfile::tempdir().unwrap();
    let args = AnalyzeArgs {
        trace_log: PathBuf::from("size1500.log"),
        output_json: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_valid() {
    let args = AnalyzeArgs {
        trace_log: PathBuf::from("size1500.log"),
        ..Default::default()
    };
    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_rate_display() {
    let bytes = RateDisplay::new(false);
    assert_eq!(bytes.format(1500.0), 1500.0);
    assert_eq!(bytes.unit(), "bytes/s");

    let bits = RateDisplay::new(true);
    assert_eq!(bits.format(1500.0), 12000.0);
    assert_eq!(bits.unit(), "bits/s");
}

#[test]
fn test_result_line_formats_positive_rate() {
    let line = result_line(1500.0, &RateDisplay::new(false));
    assert_eq!(line, "Total throughput: 1500.00 bytes/s");
}

#[test]
fn test_result_line_zero_rate_uses_fallback() {
    assert_eq!(result_line(0.0, &RateDisplay::new(false)), FALLBACK_LINE);
    assert_eq!(result_line(0.0, &RateDisplay::new(true)), FALLBACK_LINE);
}

#[test]
fn test_execute_analyze_byteless_rx_returns_zero() {
    let log = write_log(&[
        "TraceDelay TX Time: +1.0s",
        "TraceDelay: RX RXtime: +2000000000ns",
    ]);

    let args = AnalyzeArgs {
        trace_log: log.path().to_path_buf(),
        ..Default::default()
    };
    assert_eq!(execute_analyze(args).unwrap(), 0.0);
}

fn run_analyze(log: &Path) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_trace-throughput"))
        .arg("analyze")
        .arg(log)
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

#[test]
fn test_cli_prints_rate() {
    let log = write_log(&[TX_1S, RX_2S]);
    let (ok, stdout) = run_analyze(log.path());

    assert!(ok);
    assert!(stdout.contains("Total throughput: 1500.00 bytes/s"));
    assert!(!stdout.contains(FALLBACK_LINE));
}

#[test]
fn test_cli_tx_only_prints_diagnostic() {
    let log = write_log(&[TX_1S]);
    let (ok, stdout) = run_analyze(log.path());

    assert!(ok);
    assert!(stdout.contains("Not enough TX or RX records"));
    assert!(stdout.contains(FALLBACK_LINE));
}

#[test]
fn test_cli_equal_window_prints_diagnostic() {
    let log = write_log(&[
        "TraceDelay TX Time: +2.0s",
        "TraceDelay: RX RXtime: +2000000000ns 1500 bytes",
    ]);
    let (ok, stdout) = run_analyze(log.path());

    assert!(ok);
    assert!(stdout.contains("is not after the earliest TX time"));
    assert!(stdout.contains(FALLBACK_LINE));
}

#[test]
fn test_cli_byteless_rx_prints_fallback() {
    let log = write_log(&[
        "TraceDelay TX Time: +1.0s",
        "TraceDelay: RX RXtime: +2000000000ns",
    ]);
    let (ok, stdout) = run_analyze(log.path());

    assert!(ok);
    assert!(stdout.contains(FALLBACK_LINE));
    assert!(!stdout.contains("Total throughput"));
}

#[test]
fn test_cli_missing_file_fails() {
    let missing = tempfile::tempdir().unwrap().path().join("missing.log");
    let (ok, _) = run_analyze(&missing);
    assert!(!ok);
}
