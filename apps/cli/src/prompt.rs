//! Prompt construction and completion parsing
//!
//! Pure string work, kept separate from the pipeline so it can be tested
//! without any client in play.

use std::collections::HashSet;

use encore_spotify_client::TopArtist;

/// Fixed system instruction sent with every suggestion request
pub const SYSTEM_PROMPT: &str = "You are a music recommendation expert. \
    Your responses should only contain a comma-separated list of 5 artist names.";

/// Separator the model is asked to use between artist names
pub const SUGGESTION_SEPARATOR: &str = ", ";

/// How many profile artists are named in the prompt
const PROMPT_ARTIST_COUNT: usize = 5;

/// Build the suggestion prompt from a taste profile
///
/// Names at most the first five artists (profile order) and the
/// deduplicated union of every genre tag across the whole profile. Tag
/// order is unspecified.
pub fn build_prompt(profile: &[TopArtist]) -> String {
    let artists: Vec<&str> = profile
        .iter()
        .take(PROMPT_ARTIST_COUNT)
        .map(|artist| artist.name.as_str())
        .collect();

    let genres: HashSet<&str> = profile
        .iter()
        .flat_map(|artist| artist.genres.iter().map(String::as_str))
        .collect();
    let genres: Vec<&str> = genres.into_iter().collect();

    format!(
        "Based on the user's top artists: {}\n\
         And their preferred genres: {}\n\
         Suggest 5 new artists they might enjoy. Consider musical style, genre, and artistic influence.\n\
         Format your response as a comma-separated list of artist names only.",
        artists.join(SUGGESTION_SEPARATOR),
        genres.join(SUGGESTION_SEPARATOR),
    )
}

/// Parse a completion reply into raw suggestion strings
///
/// Splits on the literal `", "`. No dedup, no validation; the requested
/// count of five is advisory to the model, not enforced here.
pub fn parse_suggestions(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split(SUGGESTION_SEPARATOR)
        .map(str::to_string)
        .collect()
}
