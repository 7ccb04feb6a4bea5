use kpi_core::{AnalysisError, AnalysisResult, KpiAnalyzer, Summarizer};
use report_renderer::{render_text, FinancialReport};
use std::path::Path;
use std::sync::Arc;

pub const SUMMARY_SKIPPED: &str = "Summary generation skipped.";

/// Runs a document through summary generation and KPI extraction.
pub struct ReportPipeline {
    analyzer: Arc<dyn KpiAnalyzer>,
    summarizer: Option<Arc<dyn Summarizer>>,
    title: String,
}

impl ReportPipeline {
    pub fn new(analyzer: Arc<dyn KpiAnalyzer>, summarizer: Option<Arc<dyn Summarizer>>) -> Self {
        Self {
            analyzer,
            summarizer,
            title: report_renderer::DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// A failed summary does not abort the run: its user-facing message
    /// takes the summary's place in the report.
    pub async fn build_report(&self, text: &str) -> FinancialReport {
        let summary = match &self.summarizer {
            Some(summarizer) => {
                tracing::info!("Generating executive summary via {}", summarizer.backend_name());
                match summarizer.summarize(text).await {
                    Ok(summary) => summary,
                    Err(AnalysisError::SummaryError(message)) => {
                        tracing::warn!("Summary generation failed: {}", message);
                        message
                    }
                    Err(e) => {
                        tracing::warn!("Summary generation failed: {}", e);
                        format!("Error generating summary: {}", e)
                    }
                }
            }
            None => SUMMARY_SKIPPED.to_string(),
        };

        tracing::info!("Extracting KPIs");
        let extraction = self.analyzer.analyze(text);
        tracing::info!(
            kpis = extraction.kpis.len(),
            available_ratios = extraction.ratios.iter().filter(|(_, v)| v.is_available()).count(),
            "KPI extraction complete"
        );

        FinancialReport::new(summary, extraction).with_title(self.title.clone())
    }
}

/// Writes the plain-text rendering of `report` to `path`.
pub fn write_report(report: &FinancialReport, path: &Path) -> AnalysisResult<()> {
    std::fs::write(path, render_text(report)).map_err(|e| {
        AnalysisError::ReportError(format!("Failed to write {}: {}", path.display(), e))
    })?;
    tracing::info!("Report written to {}", path.display());
    Ok(())
}
