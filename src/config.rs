//! Process-wide settings, loaded once from the environment at startup.

use thiserror::Error;

use crate::llm::GeminiConfig;

/// Default upload limit (20 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Origin allowed by default in production (the bundled web frontend).
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Errors from reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {var} has invalid value '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Deployment mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Environment {
    /// Local development: permissive CORS, info-level logging
    #[value(alias = "development")]
    Dev,
    /// Production: CORS restricted to configured origins
    #[default]
    #[value(alias = "production")]
    Prod,
}

impl Environment {
    pub fn is_dev(&self) -> bool {
        matches!(self, Environment::Dev)
    }
}

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    /// Origins allowed by CORS outside development mode.
    pub cors_origins: Vec<String>,
    /// Maximum accepted request body size.
    pub max_upload_bytes: usize,
    /// Tesseract language code.
    pub ocr_language: String,
    pub gemini: GeminiConfig,
}

impl Settings {
    /// Settings with defaults only; nothing read from the environment.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            ocr_language: "eng".to_string(),
            gemini: GeminiConfig::default(),
        }
    }

    /// Load settings from the environment.
    ///
    /// Supported env vars (besides the `GEMINI_*` ones read by [`GeminiConfig`]):
    /// - `CORS_ORIGINS`: comma-separated list of allowed origins
    /// - `MAX_UPLOAD_BYTES`: request body limit in bytes
    /// - `OCR_LANGUAGE`: Tesseract language (default "eng")
    pub fn from_env(environment: Environment) -> Result<Self, ConfigError> {
        let mut settings = Self::new(environment);

        if let Ok(val) = std::env::var("CORS_ORIGINS") {
            settings.cors_origins = parse_origins(&val);
        }
        if let Ok(val) = std::env::var("MAX_UPLOAD_BYTES") {
            settings.max_upload_bytes =
                val.trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                        var: "MAX_UPLOAD_BYTES",
                        value: val.clone(),
                        reason: e.to_string(),
                    })?;
        }
        if let Ok(val) = std::env::var("OCR_LANGUAGE") {
            if !val.trim().is_empty() {
                settings.ocr_language = val.trim().to_string();
            }
        }

        settings.gemini = settings.gemini.with_env_overrides();
        Ok(settings)
    }
}

fn parse_origins(val: &str) -> Vec<String> {
    val.split(',')
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
