//! Stdout rendering for recommendations

use encore_spotify_client::ArtistMatch;

/// Render recommendations as a numbered human-readable list
pub fn render(recommendations: &[ArtistMatch]) -> String {
    if recommendations.is_empty() {
        return "No recommendations found.".to_string();
    }

    let mut out = String::from("Recommended Artists:\n");
    for (i, rec) in recommendations.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {}\n   Genres: {}\n   Popularity: {}/100\n   Spotify URL: {}\n",
            i + 1,
            rec.name,
            rec.genres.join(", "),
            rec.popularity,
            rec.url,
        ));
    }
    out
}
