use anyhow::{Context, Result};
use report_renderer::DEFAULT_TITLE;
use std::path::PathBuf;
use summary_client::SummaryConfig;

pub const DEFAULT_REPORT_PATH: &str = "financial_report.txt";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub report_output_path: PathBuf,
    pub report_title: String,
    pub summary_enabled: bool,
    pub summary: SummaryConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let summary_enabled = lookup("SUMMARY_ENABLED")
            .unwrap_or_else(|| "true".to_string())
            .parse()
            .context("SUMMARY_ENABLED must be 'true' or 'false'")?;
        let summary =
            SummaryConfig::from_lookup(&lookup).context("Invalid summary configuration")?;

        Ok(Self {
            report_output_path: lookup("REPORT_OUTPUT_PATH")
                .unwrap_or_else(|| DEFAULT_REPORT_PATH.to_string())
                .into(),
            report_title: lookup("REPORT_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            summary_enabled,
            summary,
        })
    }
}
