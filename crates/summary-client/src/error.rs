use kpi_core::AnalysisError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("No text provided for summarization")]
    EmptyInput,

    #[error("Missing configuration: {0}")]
    Configuration(String),

    #[error("Invalid value {value:?} for {key}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Context length exceeded: {0}")]
    ContextLengthExceeded(String),

    #[error("Summary service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model returned no summary content")]
    EmptyResponse,
}

impl SummaryError {
    /// Classifies a non-2xx response by status code and error body.
    pub fn from_status(status: u16, body: String) -> Self {
        let lowered = body.to_lowercase();
        if status == 429 || lowered.contains("rate limit") {
            SummaryError::RateLimited(body)
        } else if status == 401
            || status == 403
            || lowered.contains("invalid api key")
            || lowered.contains("authentication")
        {
            SummaryError::Unauthorized(body)
        } else if lowered.contains("context_length_exceeded") {
            SummaryError::ContextLengthExceeded(body)
        } else {
            SummaryError::Status { status, body }
        }
    }

    /// Message suitable for showing to the person who uploaded the document.
    pub fn user_message(&self) -> String {
        match self {
            SummaryError::EmptyInput => "No text provided for summarization.".to_string(),
            SummaryError::EmptyResponse => "No summary content returned by the model.".to_string(),
            SummaryError::RateLimited(_) => {
                "API rate limit exceeded. Please try again shortly.".to_string()
            }
            SummaryError::Unauthorized(_) | SummaryError::Configuration(_) => {
                "Invalid or missing API key. Please check your .env file.".to_string()
            }
            SummaryError::ContextLengthExceeded(_) => {
                "The document is too long for the AI model to process. Please try a shorter document."
                    .to_string()
            }
            other => format!("Error generating summary: {}", other),
        }
    }
}

impl From<SummaryError> for AnalysisError {
    fn from(err: SummaryError) -> Self {
        AnalysisError::SummaryError(err.user_message())
    }
}

pub type SummaryResult<T> = Result<T, SummaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            SummaryError::from_status(429, "slow down".into()),
            SummaryError::RateLimited(_)
        ));
        assert!(matches!(
            SummaryError::from_status(400, "Rate limit reached for model".into()),
            SummaryError::RateLimited(_)
        ));
        assert!(matches!(
            SummaryError::from_status(401, "{}".into()),
            SummaryError::Unauthorized(_)
        ));
        assert!(matches!(
            SummaryError::from_status(400, "Invalid API Key".into()),
            SummaryError::Unauthorized(_)
        ));
        assert!(matches!(
            SummaryError::from_status(400, r#"{"error":{"code":"context_length_exceeded"}}"#.into()),
            SummaryError::ContextLengthExceeded(_)
        ));
        assert!(matches!(
            SummaryError::from_status(503, "unavailable".into()),
            SummaryError::Status { status: 503, .. }
        ));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            SummaryError::RateLimited(String::new()).user_message(),
            "API rate limit exceeded. Please try again shortly."
        );
        assert_eq!(
            SummaryError::Configuration("GROQ_API_KEY not set".into()).user_message(),
            "Invalid or missing API key. Please check your .env file."
        );
        assert_eq!(
            SummaryError::Status { status: 500, body: "boom".into() }.user_message(),
            "Error generating summary: Summary service returned 500: boom"
        );
    }

    #[test]
    fn test_converts_into_analysis_error() {
        let err: AnalysisError = SummaryError::EmptyResponse.into();
        assert_eq!(
            err.to_string(),
            "Summary error: No summary content returned by the model."
        );
    }
}
