//! LLM completion clients for Encore
//!
//! This crate provides the [`CompletionProvider`] capability trait and two
//! adapters: [`AnthropicClient`] for the Anthropic Messages API and
//! [`OpenAiClient`] for the OpenAI chat completions API. The orchestrator
//! holds whichever one configuration selects as a `Box<dyn
//! CompletionProvider>`.
//!
//! # Example
//!
//! ```rust,no_run
//! use encore_llm_client::{provider_from_config, CompletionRequest};
//! use encore_shared_config::LlmConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LlmConfig::from_env()?;
//! let provider = provider_from_config(&config)?;
//!
//! let request = CompletionRequest::new(
//!     "You are a music recommendation expert.",
//!     "Suggest 5 artists similar to Radiohead.",
//!     1024,
//! );
//! if let Some(text) = provider.complete(&request).await? {
//!     println!("{}", text);
//! }
//! # Ok(())
//! # }
//! ```

mod anthropic;
mod error;
mod models;
mod openai;
mod provider;

pub use anthropic::AnthropicClient;
pub use error::{LlmError, LlmResult};
pub use models::CompletionRequest;
pub use openai::OpenAiClient;
pub use provider::{provider_from_config, CompletionProvider};

/// Maximum error body size embedded in error messages
const MAX_ERROR_BODY_SIZE: usize = 1000;

/// Truncate an error body before embedding it in an error message
pub(crate) fn truncate_error_body(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY_SIZE {
        return body;
    }
    let truncate_at = body
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|i| *i <= MAX_ERROR_BODY_SIZE)
        .last()
        .unwrap_or(0);
    format!("{}... (truncated)", &body[..truncate_at])
}
