//! Spotify Web API configuration types

use crate::{get_env_or_default, get_required_env, parse_env, ConfigError, ConfigResult};

/// OAuth scopes requested for the delegated session.
///
/// Only read scopes are requested; Encore never writes to the user's
/// library or playlists.
pub const OAUTH_SCOPES: &str = "user-top-read user-library-read";

/// Spotify Web API configuration
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    /// OAuth client id
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: String,

    /// Long-lived refresh token for the delegated user session
    pub refresh_token: String,

    /// Web API base URL
    pub api_url: String,

    /// Accounts service base URL (token exchange)
    pub accounts_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SpotifyConfig {
    /// Load Spotify configuration from environment variables
    ///
    /// Requires `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET` and
    /// `SPOTIFY_REFRESH_TOKEN`. Base URLs can be overridden with
    /// `SPOTIFY_API_URL` and `SPOTIFY_ACCOUNTS_URL` (useful for testing).
    pub fn from_env() -> ConfigResult<Self> {
        let client_id = get_required_env("SPOTIFY_CLIENT_ID")?;
        let client_secret = get_required_env("SPOTIFY_CLIENT_SECRET")?;
        let refresh_token = get_required_env("SPOTIFY_REFRESH_TOKEN")?;

        for (name, value) in [
            ("SPOTIFY_CLIENT_ID", &client_id),
            ("SPOTIFY_CLIENT_SECRET", &client_secret),
            ("SPOTIFY_REFRESH_TOKEN", &refresh_token),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    name.to_string(),
                    "value cannot be empty".to_string(),
                ));
            }
        }

        Ok(Self {
            client_id,
            client_secret,
            refresh_token,
            api_url: get_env_or_default("SPOTIFY_API_URL", "https://api.spotify.com"),
            accounts_url: get_env_or_default("SPOTIFY_ACCOUNTS_URL", "https://accounts.spotify.com"),
            timeout_secs: parse_env("SPOTIFY_TIMEOUT", 10)?,
        })
    }

    /// Create a configuration with explicit credentials (useful for testing)
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
            api_url: "https://api.spotify.com".to_string(),
            accounts_url: "https://accounts.spotify.com".to_string(),
            timeout_secs: 10,
        }
    }

    /// Override both base URLs (points the client at a mock server)
    pub fn with_base_urls(mut self, api_url: impl Into<String>, accounts_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self.accounts_url = accounts_url.into();
        self
    }

    /// Get the full URL for a Web API path
    pub fn api_url(&self, path: &str) -> String {
        let base = self.api_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/v1/{}", base, path)
    }

    /// Get the full URL for the accounts token endpoint
    pub fn token_url(&self) -> String {
        format!("{}/api/token", self.accounts_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = SpotifyConfig::new("id", "secret", "refresh");
        assert_eq!(config.client_id, "id");
        assert_eq!(config.api_url, "https://api.spotify.com");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_api_url() {
        let config = SpotifyConfig::new("id", "secret", "refresh");
        assert_eq!(
            config.api_url("me/top/artists"),
            "https://api.spotify.com/v1/me/top/artists"
        );
        assert_eq!(config.api_url("/search"), "https://api.spotify.com/v1/search");
    }

    #[test]
    fn test_token_url_with_trailing_slash() {
        let config = SpotifyConfig::new("id", "secret", "refresh")
            .with_base_urls("http://localhost:1234/", "http://localhost:5678/");
        assert_eq!(config.token_url(), "http://localhost:5678/api/token");
        assert_eq!(config.api_url("search"), "http://localhost:1234/v1/search");
    }

    #[test]
    fn test_from_env_missing_credentials() {
        temp_env::with_vars_unset(
            ["SPOTIFY_CLIENT_ID", "SPOTIFY_CLIENT_SECRET", "SPOTIFY_REFRESH_TOKEN"],
            || {
                let result = SpotifyConfig::from_env();
                assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
            },
        );
    }

    #[test]
    fn test_from_env_empty_secret_rejected() {
        temp_env::with_vars(
            [
                ("SPOTIFY_CLIENT_ID", Some("id")),
                ("SPOTIFY_CLIENT_SECRET", Some("  ")),
                ("SPOTIFY_REFRESH_TOKEN", Some("refresh")),
            ],
            || {
                let result = SpotifyConfig::from_env();
                assert!(matches!(result, Err(ConfigError::InvalidValue(_, _))));
            },
        );
    }

    #[test]
    fn test_scopes_exclude_playlist_write() {
        assert!(!OAUTH_SCOPES.contains("playlist-modify"));
        assert!(OAUTH_SCOPES.contains("user-top-read"));
    }
}
