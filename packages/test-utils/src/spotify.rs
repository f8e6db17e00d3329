//! Mock Spotify server for testing the profiler and resolver
//!
//! Wraps a [`wiremock::MockServer`] that answers the accounts token
//! endpoint and the Web API endpoints Encore uses, so tests run without
//! network access or real credentials.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock Spotify server (accounts + Web API on one listener)
///
/// # Example
///
/// ```rust,ignore
/// use encore_test_utils::MockSpotifyServer;
///
/// #[tokio::test]
/// async fn test_top_artists() {
///     let server = MockSpotifyServer::start().await;
///     server.mock_token_success().await;
///     server.mock_top_artists(&[("Radiohead", &["art rock"])]).await;
///
///     // Point SpotifyConfig's base URLs at server.url()
/// }
/// ```
pub struct MockSpotifyServer {
    server: MockServer,
}

impl MockSpotifyServer {
    /// Start a new mock Spotify server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL (use for both the API and accounts base URLs)
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get a reference to the underlying mock server for custom setups
    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    /// Mount a mock for a successful refresh-token exchange
    pub async fn mock_token_success(&self) {
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "mock-access-token",
                "token_type": "Bearer",
                "expires_in": 3600,
                "scope": "user-top-read user-library-read"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for a rejected refresh-token exchange
    pub async fn mock_token_failure(&self) {
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Refresh token revoked"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for the top-artists endpoint
    ///
    /// Each entry is `(name, genres)`; popularity and URLs are filled in
    /// with plausible values.
    pub async fn mock_top_artists(&self, artists: &[(&str, &[&str])]) {
        let items: Vec<serde_json::Value> = artists
            .iter()
            .enumerate()
            .map(|(i, (name, genres))| {
                json!({
                    "name": name,
                    "genres": genres,
                    "popularity": 90 - i as u32,
                    "external_urls": {
                        "spotify": format!("https://open.spotify.com/artist/top{}", i)
                    }
                })
            })
            .collect();

        Mock::given(method("GET"))
            .and(path("/v1/me/top/artists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": items })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for a top-artists request failing with the given status
    pub async fn mock_top_artists_failure(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path("/v1/me/top/artists"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": { "status": status_code, "message": "Top artists unavailable" }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a search mock that returns one match for the given query
    pub async fn mock_search_hit(
        &self,
        query: &str,
        name: &str,
        genres: &[&str],
        popularity: u32,
        url: &str,
    ) {
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("q", query))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "artists": {
                    "items": [{
                        "name": name,
                        "genres": genres,
                        "popularity": popularity,
                        "external_urls": { "spotify": url }
                    }]
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a search mock that returns no matches for the given query
    pub async fn mock_search_miss(&self, query: &str) {
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("q", query))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "artists": { "items": [] }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a search mock that fails with the given status for one query
    pub async fn mock_search_failure(&self, query: &str, status_code: u16) {
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("q", query))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": { "status": status_code, "message": "Search unavailable" }
            })))
            .mount(&self.server)
            .await;
    }

    /// Number of search requests the server has received
    pub async fn search_requests(&self) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == "/v1/search")
            .count()
    }
}
