//! HTTP client for the OpenAI-compatible completion service.

use crate::{ChatCompletion, Oracle, OracleConfig};
use async_trait::async_trait;
use saro_core::CompletionRequest;
use saro_error::{ConfigError, OracleError, OracleErrorKind};
use tracing::{debug, error, instrument};

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    config: OracleConfig,
}

impl OpenAiClient {
    /// Create a new client from a configuration.
    #[instrument(skip(config), fields(base_url = %config.base_url))]
    pub fn new(config: OracleConfig) -> Self {
        debug!("Creating completion service client");
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client configured from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_KEY` is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(OracleConfig::from_env()?))
    }

    /// Get the client configuration.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Send a chat completion request and decode the typed response.
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn chat_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<ChatCompletion, OracleError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        debug!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Request failed: {}", e);
                OracleError::new(OracleErrorKind::Transport(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Completion service returned error");
            return Err(OracleError::new(OracleErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let completion = response.json().await.map_err(|e| {
            error!("Failed to parse response: {}", e);
            OracleError::new(OracleErrorKind::Deserialization(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!("Chat completion successful");
        Ok(completion)
    }
}

#[async_trait]
impl Oracle for OpenAiClient {
    #[instrument(skip(self, request), fields(provider = "openai", model = %request.model))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String, OracleError> {
        let completion = self.chat_completion(request).await?;

        let content = completion
            .choices()
            .first()
            .map(|choice| choice.message().content().trim().to_string())
            .ok_or_else(|| OracleError::new(OracleErrorKind::EmptyCompletion))?;

        debug!(reply_len = content.len(), "Received oracle reply");
        Ok(content)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
