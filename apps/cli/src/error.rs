//! Error handling for the Encore CLI

use encore_llm_client::LlmError;
use encore_shared_config::ConfigError;
use encore_spotify_client::SpotifyError;
use thiserror::Error;

/// Errors surfaced by the recommendation pipeline
///
/// These are thin wrappers around the client crates' errors; the pipeline
/// itself never retries or translates failures, it only carries them up
/// to `main`.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Spotify client error
    #[error("Spotify error: {0}")]
    Spotify(#[from] SpotifyError),

    /// Completion provider error
    #[error("completion provider error: {0}")]
    Llm(#[from] LlmError),
}

/// Result type alias for pipeline operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::Config(ConfigError::MissingEnvVar("SPOTIFY_CLIENT_ID".to_string()));
        assert_eq!(
            err.to_string(),
            "configuration error: missing required environment variable: SPOTIFY_CLIENT_ID"
        );
    }

    #[test]
    fn test_spotify_error_conversion() {
        let err: CliError = SpotifyError::RateLimited.into();
        assert!(matches!(err, CliError::Spotify(SpotifyError::RateLimited)));
    }
}
