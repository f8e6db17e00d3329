//! Spotify Web API client implementation

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use encore_shared_config::SpotifyConfig;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use crate::error::{SpotifyError, SpotifyResult};
use crate::models::{
    ApiErrorResponse, ArtistMatch, SearchResponse, TokenResponse, TopArtist, TopArtistsResponse,
};

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default number of top artists to fetch
const DEFAULT_TOP_LIMIT: u32 = 20;

/// Time range for the top-artists ranking
const TOP_ARTISTS_TIME_RANGE: &str = "medium_term";

/// Maximum artist name length accepted for catalog searches
const MAX_ARTIST_NAME_LENGTH: usize = 256;

/// Refresh the cached access token when it is this close to expiry
const TOKEN_EXPIRY_MARGIN_SECS: u64 = 30;

/// Maximum error body size embedded in error messages
const MAX_ERROR_BODY_SIZE: usize = 1000;

/// Cached OAuth access token
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        self.expires_at
            .saturating_duration_since(Instant::now())
            .as_secs()
            > TOKEN_EXPIRY_MARGIN_SECS
    }
}

/// Spotify Web API client
///
/// Authenticates with the refresh-token grant and caches the short-lived
/// access token for the lifetime of the process.
#[derive(Clone)]
pub struct SpotifyClient {
    http_client: Client,
    config: SpotifyConfig,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl fmt::Debug for SpotifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("client_id", &self.config.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("api_url", &self.config.api_url)
            .finish()
    }
}

impl SpotifyClient {
    /// Create a new Spotify client from configuration
    ///
    /// # Errors
    /// Returns `SpotifyError::MissingCredentials` if any credential is empty
    pub fn new(config: &SpotifyConfig) -> SpotifyResult<Self> {
        if config.client_id.is_empty()
            || config.client_secret.is_empty()
            || config.refresh_token.is_empty()
        {
            return Err(SpotifyError::MissingCredentials);
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent("Encore/1.0")
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
            token: Arc::new(Mutex::new(None)),
        })
    }

    /// Create a Spotify client from environment variables
    ///
    /// # Errors
    /// Returns `SpotifyError::MissingCredentials` if the `SPOTIFY_*`
    /// variables are not set
    pub fn from_env() -> SpotifyResult<Self> {
        let config = SpotifyConfig::from_env().map_err(|_| SpotifyError::MissingCredentials)?;
        Self::new(&config)
    }

    /// Validate artist name input
    fn validate_artist_name(artist_name: &str) -> SpotifyResult<&str> {
        let trimmed = artist_name.trim();
        if trimmed.is_empty() {
            return Err(SpotifyError::InvalidInput(
                "artist name cannot be empty".to_string(),
            ));
        }
        if trimmed.len() > MAX_ARTIST_NAME_LENGTH {
            return Err(SpotifyError::InvalidInput(format!(
                "artist name too long (max {} characters)",
                MAX_ARTIST_NAME_LENGTH
            )));
        }
        Ok(trimmed)
    }

    /// Truncate an error body before embedding it in an error message
    fn truncate_error_body(body: String) -> String {
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

    /// Extract the API error message from a Spotify error envelope
    fn api_error_message(text: &str) -> String {
        match serde_json::from_str::<ApiErrorResponse>(text) {
            Ok(envelope) => envelope.error.message,
            Err(_) => Self::truncate_error_body(text.to_string()),
        }
    }

    /// Exchange the refresh token for a fresh access token
    async fn refresh_access_token(&self) -> SpotifyResult<CachedToken> {
        debug!("Refreshing Spotify access token");

        let basic = BASE64.encode(format!(
            "{}:{}",
            self.config.client_id, self.config.client_secret
        ));

        let response = self
            .http_client
            .post(self.config.token_url())
            .header("Authorization", format!("Basic {}", basic))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.config.refresh_token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpotifyError::Timeout
                } else {
                    SpotifyError::Http(e)
                }
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::BAD_REQUEST {
            let body = Self::truncate_error_body(response.text().await.unwrap_or_default());
            return Err(SpotifyError::Auth(body));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Api {
                status: status.as_u16(),
                message: Self::api_error_message(&body),
            });
        }

        let token: TokenResponse = response.json().await?;
        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        })
    }

    /// Get a valid access token, refreshing if the cached one is stale
    async fn access_token(&self) -> SpotifyResult<String> {
        let mut guard = self.token.lock().await;
        if let Some(cached) = guard.as_ref() {
            if cached.is_fresh() {
                return Ok(cached.access_token.clone());
            }
        }
        let fresh = self.refresh_access_token().await?;
        let token = fresh.access_token.clone();
        *guard = Some(fresh);
        Ok(token)
    }

    /// Issue an authenticated GET and deserialize the JSON body
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> SpotifyResult<T> {
        let token = self.access_token().await?;

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpotifyError::Timeout
                } else {
                    SpotifyError::Http(e)
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!(url = %url, "Spotify API rate limited");
            return Err(SpotifyError::RateLimited);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Auth(Self::api_error_message(&body)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Api {
                status: status.as_u16(),
                message: Self::api_error_message(&body),
            });
        }

        response.json().await.map_err(SpotifyError::Http)
    }

    /// Get the user's top artists over the medium-term listening window
    ///
    /// Results keep Spotify's own relevance ordering; they are not
    /// re-sorted locally.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of artists to return (default: 20)
    ///
    /// # Errors
    /// - `SpotifyError::Auth` - If the session is not authorized
    /// - `SpotifyError::Api` - If Spotify returns an error status
    /// - `SpotifyError::Http` - If the HTTP request fails
    #[instrument(skip(self))]
    pub async fn top_artists(&self, limit: Option<u32>) -> SpotifyResult<Vec<TopArtist>> {
        let limit = limit.unwrap_or(DEFAULT_TOP_LIMIT);
        let limit_str = limit.to_string();

        debug!(limit, "Fetching top artists from Spotify");

        let response: TopArtistsResponse = self
            .get_json(
                self.config.api_url("me/top/artists"),
                &[
                    ("limit", limit_str.as_str()),
                    ("time_range", TOP_ARTISTS_TIME_RANGE),
                ],
            )
            .await?;

        let artists: Vec<TopArtist> = response.items.into_iter().map(Into::into).collect();

        debug!(result_count = artists.len(), "Fetched top artists");

        Ok(artists)
    }

    /// Search the catalog for the single best match for an artist name
    ///
    /// Returns `Ok(None)` when the catalog has no match; callers treat
    /// that as a filtering outcome, not an error.
    ///
    /// # Errors
    /// - `SpotifyError::InvalidInput` - If the name is empty or too long
    /// - `SpotifyError::Auth` - If the session is not authorized
    /// - `SpotifyError::Api` - If Spotify returns an error status
    /// - `SpotifyError::Http` - If the HTTP request fails
    #[instrument(skip(self))]
    pub async fn search_artist(&self, artist_name: &str) -> SpotifyResult<Option<ArtistMatch>> {
        let artist_name = Self::validate_artist_name(artist_name)?;

        debug!(artist = %artist_name, "Searching Spotify catalog");

        let response: SearchResponse = self
            .get_json(
                self.config.api_url("search"),
                &[("q", artist_name), ("type", "artist"), ("limit", "1")],
            )
            .await?;

        let best = response.artists.items.into_iter().next().map(Into::into);

        if best.is_none() {
            debug!(artist = %artist_name, "No catalog match found");
        }

        Ok(best)
    }
}
