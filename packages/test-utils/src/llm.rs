//! Mock completion-provider server for testing suggestion generation
//!
//! Simulates the Anthropic Messages API and the OpenAI chat completions
//! API on a single [`wiremock::MockServer`].

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock LLM server covering both provider wire formats
pub struct MockLlmServer {
    server: MockServer,
}

impl MockLlmServer {
    /// Start a new mock LLM server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL (use as the provider base URL)
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get a reference to the underlying mock server for custom setups
    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    /// Mount a mock for a successful Anthropic completion
    pub async fn mock_anthropic_completion(&self, text: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_mock",
                "type": "message",
                "role": "assistant",
                "model": "claude-3-5-sonnet-20241022",
                "content": [{ "type": "text", "text": text }],
                "stop_reason": "end_turn"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for an Anthropic response with no content blocks
    pub async fn mock_anthropic_empty(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_mock",
                "type": "message",
                "role": "assistant",
                "model": "claude-3-5-sonnet-20241022",
                "content": [],
                "stop_reason": "end_turn"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for an Anthropic API failure
    pub async fn mock_anthropic_failure(&self, status_code: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "type": "error",
                "error": { "type": "api_error", "message": message }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for a successful OpenAI chat completion
    pub async fn mock_openai_completion(&self, text: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-mock",
                "object": "chat.completion",
                "model": "gpt-4o-mini",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": text },
                    "finish_reason": "stop"
                }]
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for an OpenAI response with no choices
    pub async fn mock_openai_empty(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-mock",
                "object": "chat.completion",
                "model": "gpt-4o-mini",
                "choices": []
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for an OpenAI API failure
    pub async fn mock_openai_failure(&self, status_code: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": { "message": message, "type": "api_error" }
            })))
            .mount(&self.server)
            .await;
    }
}
