//! Spotify Web API client for Encore
//!
//! This crate provides a client for the parts of the Spotify Web API that
//! Encore uses:
//! - Top-artists retrieval for the authorized listener
//! - Catalog search for resolving artist names
//!
//! The client authenticates with the OAuth refresh-token grant and caches
//! the short-lived access token internally.
//!
//! # Example
//!
//! ```rust,no_run
//! use encore_spotify_client::SpotifyClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SpotifyClient::from_env()?;
//!
//! // Top artists with genre tags
//! let top = client.top_artists(Some(20)).await?;
//! for artist in &top {
//!     println!("{}: {}", artist.name, artist.genres.join(", "));
//! }
//!
//! // Resolve a name against the catalog
//! if let Some(found) = client.search_artist("Radiohead").await? {
//!     println!("{} ({}/100) {}", found.name, found.popularity, found.url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `SPOTIFY_CLIENT_ID`: OAuth client id (required)
//! - `SPOTIFY_CLIENT_SECRET`: OAuth client secret (required)
//! - `SPOTIFY_REFRESH_TOKEN`: refresh token for the user session (required)

mod client;
mod error;
mod models;

pub use client::SpotifyClient;
pub use error::{SpotifyError, SpotifyResult};
pub use models::{ArtistMatch, TopArtist};
