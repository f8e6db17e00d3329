//! Completion provider trait and config-driven factory

use async_trait::async_trait;
use encore_shared_config::{LlmConfig, LlmProvider};

use crate::anthropic::AnthropicClient;
use crate::error::LlmResult;
use crate::models::CompletionRequest;
use crate::openai::OpenAiClient;

/// Capability interface for text-completion providers
///
/// Implementations send one prompt and return the generated text.
/// `Ok(None)` means the provider answered successfully but produced no
/// content; callers decide what that means (Encore treats it as "no
/// suggestions").
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send a completion request and return the generated text, if any
    async fn complete(&self, request: &CompletionRequest) -> LlmResult<Option<String>>;

    /// Provider name for logging (e.g. "anthropic", "openai")
    fn name(&self) -> &'static str;
}

/// Build the provider selected by the configuration
pub fn provider_from_config(config: &LlmConfig) -> LlmResult<Box<dyn CompletionProvider>> {
    Ok(match config.provider {
        LlmProvider::Anthropic => Box::new(AnthropicClient::new(config)?),
        LlmProvider::OpenAi => Box::new(OpenAiClient::new(config)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_selects_provider() {
        let anthropic =
            provider_from_config(&LlmConfig::new(LlmProvider::Anthropic, "key")).unwrap();
        assert_eq!(anthropic.name(), "anthropic");

        let openai = provider_from_config(&LlmConfig::new(LlmProvider::OpenAi, "key")).unwrap();
        assert_eq!(openai.name(), "openai");
    }

    #[test]
    fn test_factory_rejects_empty_key() {
        let result = provider_from_config(&LlmConfig::new(LlmProvider::Anthropic, ""));
        assert!(result.is_err());
    }
}
