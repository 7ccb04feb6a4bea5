use crate::error::{SummaryError, SummaryResult};
use crate::prompt::build_summary_prompt;
use crate::SummaryConfig;
use async_trait::async_trait;
use kpi_core::{AnalysisError, Summarizer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
#[derive(Clone)]
pub struct SummaryClient {
    client: reqwest::Client,
    config: SummaryConfig,
}

impl SummaryClient {
    pub fn new(config: SummaryConfig) -> SummaryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Generates the executive summary for a document's text.
    pub async fn generate_summary(&self, text: &str) -> SummaryResult<String> {
        if text.trim().is_empty() {
            return Err(SummaryError::EmptyInput);
        }
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| SummaryError::Configuration("GROQ_API_KEY not set".to_string()))?;

        let prompt = build_summary_prompt(text);
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        tracing::debug!(model = %self.config.model, chars = text.len(), "Requesting executive summary");

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = SummaryError::from_status(status.as_u16(), body);
            tracing::warn!("Summary request failed: {}", err);
            return Err(err);
        }

        let completion = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| SummaryError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|c| c.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(SummaryError::EmptyResponse);
        }
        Ok(content)
    }
}

#[async_trait]
impl Summarizer for SummaryClient {
    async fn summarize(&self, text: &str) -> Result<String, AnalysisError> {
        Ok(self.generate_summary(text).await?)
    }

    fn backend_name(&self) -> &'static str {
        "chat-completions"
    }
}
