//! The three-stage recommendation pipeline
//!
//! Profile -> suggest -> resolve, strictly in sequence. Each stage is one
//! call against an external service plus formatting; failures propagate
//! unchanged.

use encore_llm_client::{provider_from_config, CompletionProvider, CompletionRequest};
use encore_shared_config::CommonConfig;
use encore_spotify_client::{ArtistMatch, SpotifyClient, TopArtist};
use tracing::{debug, info, instrument};

use crate::error::CliResult;
use crate::prompt::{build_prompt, parse_suggestions, SYSTEM_PROMPT};

/// Orchestrator over the streaming client and a completion provider
pub struct Recommender {
    spotify: SpotifyClient,
    provider: Box<dyn CompletionProvider>,
    max_tokens: u32,
}

impl Recommender {
    /// Create a recommender from already-built clients
    pub fn new(
        spotify: SpotifyClient,
        provider: Box<dyn CompletionProvider>,
        max_tokens: u32,
    ) -> Self {
        Self {
            spotify,
            provider,
            max_tokens,
        }
    }

    /// Create a recommender from configuration
    pub fn from_config(config: &CommonConfig) -> CliResult<Self> {
        let spotify = SpotifyClient::new(&config.spotify)?;
        let provider = provider_from_config(&config.llm)?;
        Ok(Self::new(spotify, provider, config.llm.max_tokens))
    }

    /// Fetch the listener's taste profile
    ///
    /// Order is Spotify's own relevance ranking over the medium-term
    /// window; nothing is re-sorted locally.
    #[instrument(skip(self))]
    pub async fn taste_profile(&self, limit: Option<u32>) -> CliResult<Vec<TopArtist>> {
        Ok(self.spotify.top_artists(limit).await?)
    }

    /// Ask the completion provider for similar-artist suggestions
    ///
    /// A successful response with no generated content yields an empty
    /// list, not an error.
    #[instrument(skip(self, profile), fields(provider = self.provider.name()))]
    pub async fn generate_suggestions(&self, profile: &[TopArtist]) -> CliResult<Vec<String>> {
        let request = CompletionRequest::new(SYSTEM_PROMPT, build_prompt(profile), self.max_tokens);

        let Some(text) = self.provider.complete(&request).await? else {
            debug!("Completion contained no content, returning no suggestions");
            return Ok(Vec::new());
        };

        let suggestions = parse_suggestions(&text);
        debug!(count = suggestions.len(), "Parsed suggestions");
        Ok(suggestions)
    }

    /// Resolve suggestions against the catalog, in input order
    ///
    /// Suggestions with no catalog match are silently dropped; the first
    /// lookup failure aborts the remaining lookups.
    #[instrument(skip(self, suggestions), fields(count = suggestions.len()))]
    pub async fn resolve(&self, suggestions: &[String]) -> CliResult<Vec<ArtistMatch>> {
        let mut resolved = Vec::new();
        for name in suggestions {
            match self.spotify.search_artist(name).await? {
                Some(record) => resolved.push(record),
                None => {
                    debug!(artist = %name, "Dropping suggestion with no catalog match");
                }
            }
        }
        Ok(resolved)
    }

    /// Run the full pipeline
    pub async fn run(&self, limit: Option<u32>) -> CliResult<Vec<ArtistMatch>> {
        info!("Fetching top artists");
        let profile = self.taste_profile(limit).await?;

        info!(artists = profile.len(), "Generating recommendations");
        let suggestions = self.generate_suggestions(&profile).await?;

        info!(
            suggestions = suggestions.len(),
            "Resolving suggestions against the catalog"
        );
        self.resolve(&suggestions).await
    }
}
