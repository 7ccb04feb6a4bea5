use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Document error: {0}")]
    DocumentError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),

    #[error("Summary error: {0}")]
    SummaryError(String),

    #[error("Report error: {0}")]
    ReportError(String),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
