//! Encore — AI-assisted artist recommendations
//!
//! Fetches the listener's top Spotify artists, asks an LLM completion
//! provider for similar-artist suggestions, resolves each suggestion
//! against the Spotify catalog, and renders the enriched results.

pub mod config;
pub mod error;
pub mod output;
pub mod prompt;
pub mod recommender;

pub use config::Config;
pub use error::{CliError, CliResult};
pub use recommender::Recommender;
