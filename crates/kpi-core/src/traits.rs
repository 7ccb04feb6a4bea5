use async_trait::async_trait;
use crate::{AnalysisError, KpiExtraction};

/// Trait for engines that pull KPIs and derived ratios out of document text.
///
/// Extraction never fails: anything that cannot be recognised is simply
/// absent from the result, and uncomputable ratios carry a reason.
pub trait KpiAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> KpiExtraction;
}

/// Trait for narrative summary generators (hosted LLMs, canned text, ...)
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, AnalysisError>;

    fn backend_name(&self) -> &'static str;
}
