//! Output formatting for finished reports.
//!
//! Supports pretty-printing to the log, JSON to stdout, and JSON files.

use anyhow::Result;
use tracing::{debug, info};

use crate::model::Report;
use std::fs;
use std::path::Path;

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &Report) {
    debug!("{:#?}", report);
}

/// Prints a report as pretty-printed JSON on stdout.
pub fn print_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes a report as pretty-printed JSON, creating parent directories
/// as needed.
pub fn write_json(path: &Path, report: &Report) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(report)?)?;
    info!(path = %path.display(), "Report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalyticsData, Report};
    use std::env;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    fn sample_report() -> Report {
        let mut report = Report::new("survey-1");
        report
            .averages
            .insert("Q1".to_string(), AnalyticsData::new(4.0));
        report
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&sample_report());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&sample_report()).unwrap();
    }

    #[test]
    fn test_write_json_round_trips() {
        let path = temp_path("survey_analytics_test_write.json");
        let _ = fs::remove_file(&path); // clean up any prior run

        let report = sample_report();
        write_json(&path, &report).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Report = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);

        fs::remove_file(&path).unwrap();
    }
}
