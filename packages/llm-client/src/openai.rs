//! OpenAI chat completions adapter

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use encore_shared_config::LlmConfig;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::{LlmError, LlmResult};
use crate::models::{CompletionRequest, OpenAiMessage, OpenAiRequest, OpenAiResponse};
use crate::provider::CompletionProvider;
use crate::truncate_error_body;

/// Client for the OpenAI chat completions API
#[derive(Clone)]
pub struct OpenAiClient {
    http_client: Client,
    config: LlmConfig,
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl OpenAiClient {
    /// Create a new OpenAI client from configuration
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
impl CompletionProvider for OpenAiClient {
    #[instrument(skip(self, request))]
    async fn complete(&self, request: &CompletionRequest) -> LlmResult<Option<String>> {
        let body = OpenAiRequest {
            model: &self.config.model,
            max_tokens: request.max_tokens,
            messages: vec![
                OpenAiMessage {
                    role: "system",
                    content: &request.system,
                },
                OpenAiMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
        };

        debug!(
            model = %self.config.model,
            prompt_len = request.prompt.len(),
            "Requesting completion from OpenAI"
        );

        let response = self
            .http_client
            .post(self.config.chat_completions_url())
            .bearer_auth(&self.config.api_key)
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

        let parsed: OpenAiResponse = response.json().await?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty());

        debug!(has_content = text.is_some(), "OpenAI completion finished");

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encore_shared_config::LlmProvider;

    #[test]
    fn test_client_requires_api_key() {
        let config = LlmConfig::new(LlmProvider::OpenAi, "");
        assert!(matches!(
            OpenAiClient::new(&config),
            Err(LlmError::MissingApiKey)
        ));
    }

    #[test]
    fn test_provider_name() {
        let config = LlmConfig::new(LlmProvider::OpenAi, "test-key");
        let client = OpenAiClient::new(&config).unwrap();
        assert_eq!(client.name(), "openai");
    }
}
