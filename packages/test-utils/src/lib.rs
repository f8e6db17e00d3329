//! Test utilities for Encore
//!
//! Wiremock-backed mock servers for the two external services Encore
//! talks to. Used by integration tests across the workspace.

mod llm;
mod spotify;

pub use llm::MockLlmServer;
pub use spotify::MockSpotifyServer;
