//! Gemini client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Configuration for the Gemini analysis client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API endpoint (scheme and host, no path)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// API key, sent in the `x-goog-api-key` header
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Model to use for analysis
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation
    #[serde(default)]
    pub temperature: f32,
    /// Token budget for the model's thinking phase (0 disables thinking)
    #[serde(default)]
    pub thinking_budget: u32,
    /// Cap on tokens in the response; unset leaves the model's own limit
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            model: default_model(),
            temperature: 0.0,
            thinking_budget: 0,
            max_output_tokens: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `GEMINI_API_KEY`: API key (required to reach the API)
    /// - `GEMINI_ENDPOINT`: API endpoint
    /// - `GEMINI_MODEL`: Model name
    /// - `GEMINI_MAX_OUTPUT_TOKENS`: Maximum tokens in response
    /// - `GEMINI_TIMEOUT_SECS`: Request timeout
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("GEMINI_API_KEY") {
            if !val.trim().is_empty() {
                self.api_key = Some(val.trim().to_string());
            }
        }
        if let Ok(val) = std::env::var("GEMINI_ENDPOINT") {
            self.endpoint = val;
        }
        if let Ok(val) = std::env::var("GEMINI_MODEL") {
            self.model = val;
        }
        if let Ok(val) = std::env::var("GEMINI_MAX_OUTPUT_TOKENS") {
            if let Some(n) = parse_env_number("GEMINI_MAX_OUTPUT_TOKENS", &val) {
                self.max_output_tokens = Some(n);
            }
        }
        if let Ok(val) = std::env::var("GEMINI_TIMEOUT_SECS") {
            if let Some(n) = parse_env_number("GEMINI_TIMEOUT_SECS", &val) {
                self.timeout_secs = n;
            }
        }
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the `generateContent` call for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// Parse a numeric override, warning and returning `None` when it isn't a number.
fn parse_env_number<T: std::str::FromStr>(var: &str, val: &str) -> Option<T> {
    match val.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid number", var, val);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_deterministic() {
        let config = GeminiConfig::default();
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.thinking_budget, 0);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.api_key.is_none());
        assert_eq!(config.max_output_tokens, None);
    }

    #[test]
    fn test_parse_env_number() {
        assert_eq!(parse_env_number::<u32>("GEMINI_MAX_OUTPUT_TOKENS", "8192"), Some(8192));
        assert_eq!(parse_env_number::<u64>("GEMINI_TIMEOUT_SECS", " 30 "), Some(30));
        assert_eq!(parse_env_number::<u64>("GEMINI_TIMEOUT_SECS", "2m"), None);
        assert_eq!(parse_env_number::<u32>("GEMINI_MAX_OUTPUT_TOKENS", "-1"), None);
    }

    #[test]
    fn test_generate_url() {
        let config = GeminiConfig::default()
            .with_endpoint("http://localhost:9999/")
            .with_model("gemini-test");
        assert_eq!(
            config.generate_url(),
            "http://localhost:9999/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = GeminiConfig::default().with_api_key("secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
