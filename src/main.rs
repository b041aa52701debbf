//! CLI entry point for the survey analytics tool.
//!
//! Provides subcommands for building per-question reports from the survey
//! and response services, and for analyzing local survey exports offline.

mod infra;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use survey_analytics::model::Report;
use survey_analytics::output::{print_json, print_pretty, write_json};
use survey_analytics::report::aggregate::build_report;
use survey_analytics::service::ReportService;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::infra::http::HttpStore;
use crate::infra::local::{load_responses, load_survey};

#[derive(Parser)]
#[command(name = "survey_analytics")]
#[command(about = "A tool to aggregate survey responses into per-question reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a report from the survey and response services
    Report {
        /// Survey to report on
        #[arg(long)]
        survey_id: String,

        /// Day to report on (yyyy-MM-dd); enables the week-over-week comparison
        #[arg(long)]
        day: Option<String>,

        /// Restrict responses to a single batch
        #[arg(long)]
        batch: Option<String>,

        /// File to write the report JSON to (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build a single-window report from local files
    Analyze {
        /// Survey definition JSON file
        #[arg(long)]
        survey: PathBuf,

        /// Response export CSV (header row holds question titles)
        #[arg(long)]
        responses: PathBuf,

        /// File to write the report JSON to (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/survey_analytics.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("survey_analytics.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            survey_id,
            day,
            batch,
            output,
        } => {
            let base_url = std::env::var("SURVEY_API_URL")
                .context("SURVEY_API_URL must be set to the survey service base URL")?;
            let store = HttpStore::new(base_url)?;
            let service = ReportService::new(store.clone(), store);

            let report = match day.as_deref() {
                Some(day) => {
                    service
                        .report_for_day(&survey_id, day, batch.as_deref())
                        .await?
                }
                None => service.report(&survey_id).await?,
            };

            deliver(&report, output.as_deref())?;
        }
        Commands::Analyze {
            survey,
            responses,
            output,
        } => {
            let survey = load_survey(&survey)?;
            let responses = load_responses(&responses)?;
            info!(
                survey_id = %survey.id,
                responses = responses.len(),
                "Local data loaded"
            );

            let report = build_report(&survey, &responses);
            deliver(&report, output.as_deref())?;
        }
    }

    Ok(())
}

/// Writes the report to the requested file, or pretty JSON on stdout.
fn deliver(report: &Report, output: Option<&Path>) -> Result<()> {
    print_pretty(report);
    match output {
        Some(path) => write_json(path, report),
        None => print_json(report),
    }
}
