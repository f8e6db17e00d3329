//! LLM completion provider configuration types

use crate::{get_env_or_default, get_required_env, parse_env, ConfigError, ConfigResult};

/// Default Anthropic model for suggestion generation
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Default OpenAI model for suggestion generation
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Which completion provider to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmProvider {
    #[default]
    Anthropic,
    OpenAi,
}

impl std::str::FromStr for LlmProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anthropic" | "claude" => Ok(Self::Anthropic),
            "openai" | "gpt" => Ok(Self::OpenAi),
            other => Err(ConfigError::InvalidValue(
                "LLM_PROVIDER".to_string(),
                format!("unknown provider '{}'", other),
            )),
        }
    }
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anthropic => write!(f, "anthropic"),
            Self::OpenAi => write!(f, "openai"),
        }
    }
}

impl LlmProvider {
    /// Default model identifier for this provider
    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Anthropic => DEFAULT_ANTHROPIC_MODEL,
            Self::OpenAi => DEFAULT_OPENAI_MODEL,
        }
    }

    /// Default API base URL for this provider
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Anthropic => "https://api.anthropic.com",
            Self::OpenAi => "https://api.openai.com",
        }
    }

    /// Name of the environment variable holding this provider's API key
    pub fn api_key_var(&self) -> &'static str {
        match self {
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
        }
    }
}

/// LLM completion service configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which provider to talk to
    pub provider: LlmProvider,

    /// API key for the selected provider
    pub api_key: String,

    /// Model identifier
    pub model: String,

    /// API base URL
    pub base_url: String,

    /// Output-token budget per completion
    pub max_tokens: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl LlmConfig {
    /// Load LLM configuration from environment variables
    ///
    /// `LLM_PROVIDER` selects the provider (default: anthropic); the API
    /// key is read from `ANTHROPIC_API_KEY` or `OPENAI_API_KEY`
    /// accordingly. `LLM_MODEL`, `LLM_BASE_URL`, `LLM_MAX_TOKENS` and
    /// `LLM_TIMEOUT` override per-provider defaults.
    pub fn from_env() -> ConfigResult<Self> {
        let provider: LlmProvider = match std::env::var("LLM_PROVIDER") {
            Ok(value) => value.parse()?,
            Err(_) => LlmProvider::default(),
        };

        let api_key = get_required_env(provider.api_key_var())?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                provider.api_key_var().to_string(),
                "API key cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            provider,
            api_key,
            model: get_env_or_default("LLM_MODEL", provider.default_model()),
            base_url: get_env_or_default("LLM_BASE_URL", provider.default_base_url()),
            max_tokens: parse_env("LLM_MAX_TOKENS", 1024)?,
            timeout_secs: parse_env("LLM_TIMEOUT", 30)?,
        })
    }

    /// Create a configuration for a provider with an explicit key (useful for testing)
    pub fn new(provider: LlmProvider, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            model: provider.default_model().to_string(),
            base_url: provider.default_base_url().to_string(),
            max_tokens: 1024,
            timeout_secs: 30,
        }
    }

    /// Override the API base URL (points the client at a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get the full URL for the Anthropic messages endpoint
    pub fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }

    /// Get the full URL for the OpenAI chat completions endpoint
    pub fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parsing() {
        assert_eq!("anthropic".parse::<LlmProvider>().unwrap(), LlmProvider::Anthropic);
        assert_eq!("Claude".parse::<LlmProvider>().unwrap(), LlmProvider::Anthropic);
        assert_eq!("openai".parse::<LlmProvider>().unwrap(), LlmProvider::OpenAi);
        assert_eq!("GPT".parse::<LlmProvider>().unwrap(), LlmProvider::OpenAi);
        assert!("mistral".parse::<LlmProvider>().is_err());
    }

    #[test]
    fn test_default_models() {
        assert_eq!(LlmProvider::Anthropic.default_model(), DEFAULT_ANTHROPIC_MODEL);
        assert_eq!(LlmProvider::OpenAi.default_model(), DEFAULT_OPENAI_MODEL);
    }

    #[test]
    fn test_endpoint_urls() {
        let config = LlmConfig::new(LlmProvider::Anthropic, "key");
        assert_eq!(config.messages_url(), "https://api.anthropic.com/v1/messages");

        let config = LlmConfig::new(LlmProvider::OpenAi, "key").with_base_url("http://localhost:9999/");
        assert_eq!(
            config.chat_completions_url(),
            "http://localhost:9999/v1/chat/completions"
        );
    }

    #[test]
    fn test_from_env_selects_key_by_provider() {
        temp_env::with_vars(
            [
                ("LLM_PROVIDER", Some("openai")),
                ("OPENAI_API_KEY", Some("sk-test")),
                ("ANTHROPIC_API_KEY", None),
                ("LLM_MODEL", None),
                ("LLM_BASE_URL", None),
            ],
            || {
                let config = LlmConfig::from_env().unwrap();
                assert_eq!(config.provider, LlmProvider::OpenAi);
                assert_eq!(config.api_key, "sk-test");
                assert_eq!(config.model, DEFAULT_OPENAI_MODEL);
            },
        );
    }

    #[test]
    fn test_from_env_missing_key() {
        temp_env::with_vars(
            [("LLM_PROVIDER", Some("anthropic")), ("ANTHROPIC_API_KEY", None)],
            || {
                let result = LlmConfig::from_env();
                assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
            },
        );
    }
}
