//! Configuration for the completion service connection.

use saro_error::ConfigError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the OpenAI-compatible completion service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OracleConfig {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Base URL of the service (e.g., "https://api.openai.com/v1")
    pub base_url: String,
}

impl OracleConfig {
    /// Create a configuration for the default OpenAI endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `OPENAI_API_KEY` (required, must not be blank)
    /// - `OPENAI_BASE_URL` (default: "https://api.openai.com/v1")
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_KEY` is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::new("OPENAI_API_KEY not set"))?;
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigError::new("OPENAI_API_KEY is blank"));
        }
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key: api_key.to_string(),
            base_url,
        })
    }

    /// Point the client at a different OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
