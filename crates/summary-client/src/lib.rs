pub mod client;
pub mod error;
pub mod prompt;

pub use client::SummaryClient;
pub use error::{SummaryError, SummaryResult};
pub use prompt::build_summary_prompt;

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Configuration for the hosted summary model
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Kept low for factual rather than creative output.
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.3,
            max_tokens: 500,
            timeout: Duration::from_secs(60),
        }
    }
}

impl SummaryConfig {
    /// Load from environment variables, falling back to defaults for unset
    /// ones. A set but unparseable numeric value is an error.
    pub fn from_env() -> SummaryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SummaryConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SummaryResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            api_key: lookup("GROQ_API_KEY").filter(|s| !s.is_empty()),
            base_url: lookup("GROQ_BASE_URL").unwrap_or(defaults.base_url),
            model: lookup("SUMMARY_MODEL").unwrap_or(defaults.model),
            temperature: parse_setting(&lookup, "SUMMARY_TEMPERATURE", defaults.temperature)?,
            max_tokens: parse_setting(&lookup, "SUMMARY_MAX_TOKENS", defaults.max_tokens)?,
            timeout: parse_setting(&lookup, "SUMMARY_TIMEOUT_SECS", defaults.timeout.as_secs())
                .map(Duration::from_secs)?,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

fn parse_setting<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> SummaryResult<T> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| SummaryError::InvalidSetting { key, value: raw }),
        None => Ok(default),
    }
}
