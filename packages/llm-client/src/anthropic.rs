//! Anthropic Messages API adapter

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use encore_shared_config::LlmConfig;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::{LlmError, LlmResult};
use crate::models::{AnthropicMessage, AnthropicRequest, AnthropicResponse, CompletionRequest};
use crate::provider::CompletionProvider;
use crate::truncate_error_body;

/// Anthropic API version header value
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for the Anthropic Messages API
#[derive(Clone)]
pub struct AnthropicClient {
    http_client: Client,
    config: LlmConfig,
}

impl fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl AnthropicClient {
    /// Create a new Anthropic client from configuration
    ///
    /// # Errors
    /// Returns `LlmError::MissingApiKey` if the API key is empty
    pub fn new(config: &LlmConfig) -> LlmResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl CompletionProvider for AnthropicClient {
    #[instrument(skip(self, request))]
    async fn complete(&self, request: &CompletionRequest) -> LlmResult<Option<String>> {
        let body = AnthropicRequest {
            model: &self.config.model,
            max_tokens: request.max_tokens,
            system: &request.system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: &request.prompt,
            }],
        };

        debug!(
            model = %self.config.model,
            prompt_len = request.prompt.len(),
            "Requesting completion from Anthropic"
        );

        let response = self
            .http_client
            .post(self.config.messages_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| if e.is_timeout() { LlmError::Timeout } else { LlmError::Http(e) })?;

        let status = response.status();
        if !status.is_success() {
            let body = truncate_error_body(response.text().await.unwrap_or_default());
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: AnthropicResponse = response.json().await?;
        let text = parsed
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .filter(|text| !text.is_empty());

        debug!(
            has_content = text.is_some(),
            "Anthropic completion finished"
        );

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "anthropic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encore_shared_config::LlmProvider;

    fn test_config() -> LlmConfig {
        LlmConfig::new(LlmProvider::Anthropic, "test-key")
    }

    #[test]
    fn test_client_requires_api_key() {
        let config = LlmConfig::new(LlmProvider::Anthropic, "  ");
        assert!(matches!(
            AnthropicClient::new(&config),
            Err(LlmError::MissingApiKey)
        ));
    }

    #[test]
    fn test_client_debug_redacts_api_key() {
        let client = AnthropicClient::new(&test_config()).unwrap();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("test-key"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_provider_name() {
        let client = AnthropicClient::new(&test_config()).unwrap();
        assert_eq!(client.name(), "anthropic");
    }
}
