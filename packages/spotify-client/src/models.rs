//! Spotify Web API response models

use serde::{Deserialize, Serialize};

/// One of the listener's top artists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopArtist {
    /// Artist display name
    pub name: String,
    /// Genre tags, in the order Spotify returns them
    pub genres: Vec<String>,
}

/// An artist resolved from a catalog search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistMatch {
    /// Artist display name
    pub name: String,
    /// Genre tags, in the order Spotify returns them
    pub genres: Vec<String>,
    /// Popularity score (0-100)
    pub popularity: u8,
    /// Canonical Spotify URL for the artist
    pub url: String,
}

// Internal response types for deserialization

#[derive(Debug, Deserialize)]
pub(crate) struct TopArtistsResponse {
    pub items: Vec<RawArtist>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub artists: ArtistPage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistPage {
    pub items: Vec<RawArtist>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawArtist {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: u8,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

impl From<RawArtist> for TopArtist {
    fn from(raw: RawArtist) -> Self {
        Self {
            name: raw.name,
            genres: raw.genres,
        }
    }
}

impl From<RawArtist> for ArtistMatch {
    fn from(raw: RawArtist) -> Self {
        Self {
            name: raw.name,
            genres: raw.genres,
            popularity: raw.popularity,
            url: raw.external_urls.spotify,
        }
    }
}

/// Token endpoint response
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    /// Lifetime of the access token in seconds
    pub expires_in: u64,
}

/// Spotify API error envelope
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
