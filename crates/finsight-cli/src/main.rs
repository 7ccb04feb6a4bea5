use std::sync::Arc;

use anyhow::{Context, Result};
use kpi_core::{AnalysisError, Summarizer};
use kpi_extractor::KpiExtractor;
use report_renderer::render_markdown;
use summary_client::SummaryClient;

mod args;
mod config;
mod document;
mod pipeline;

use args::{CliArgs, OutputMode, USAGE};
use config::AppConfig;
use pipeline::{write_report, ReportPipeline};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    if raw.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return;
    }

    let args = match CliArgs::parse(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args).await {
        eprintln!("{}", describe_failure(&err));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };
    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    // Logs go to stderr so stdout carries only the report.
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    }
}

async fn run(args: CliArgs) -> Result<()> {
    let config = AppConfig::from_env()?;

    let summarizer: Option<Arc<dyn Summarizer>> = if args.skip_summary || !config.summary_enabled {
        tracing::info!("Summary generation disabled");
        None
    } else {
        let client = SummaryClient::new(config.summary.clone())
            .context("Failed to build summary HTTP client")?;
        if !config.summary.has_api_key() {
            tracing::warn!("GROQ_API_KEY not set, summary requests will fail");
        }
        Some(Arc::new(client) as Arc<dyn Summarizer>)
    };

    let pipeline = ReportPipeline::new(Arc::new(KpiExtractor::new()), summarizer)
        .with_title(config.report_title.clone());

    tracing::info!("Loading document");
    let text = document::load_text(&args.source)?;
    tracing::info!(chars = text.len(), "Document loaded");

    let report = pipeline.build_report(&text).await;

    let output_path = args.output.unwrap_or(config.report_output_path);
    write_report(&report, &output_path)?;

    match args.mode {
        OutputMode::Markdown => print!("{}", render_markdown(&report)),
        OutputMode::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Maps a failure onto the category shown to the user.
fn describe_failure(err: &anyhow::Error) -> String {
    match err.downcast_ref::<AnalysisError>() {
        Some(AnalysisError::DocumentError(msg)) => format!("File Error: {}", msg),
        Some(AnalysisError::InvalidData(msg)) => format!("Data Error: {}", msg),
        _ => format!("Processing Error: {:#}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_categories() {
        let file = anyhow::Error::from(AnalysisError::DocumentError("File not found: a.txt".into()));
        assert_eq!(describe_failure(&file), "File Error: File not found: a.txt");

        let data = anyhow::Error::from(AnalysisError::InvalidData("Unsupported file format: .pdf".into()));
        assert_eq!(describe_failure(&data), "Data Error: Unsupported file format: .pdf");

        let other = anyhow::Error::from(AnalysisError::ReportError("disk full".into()));
        assert!(describe_failure(&other).starts_with("Processing Error:"));
    }
}
