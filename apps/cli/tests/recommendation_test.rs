//! End-to-end pipeline tests against mock Spotify and LLM servers
//!
//! Covers the pipeline contracts: suggestion parsing feeding the
//! resolver, silent dropping of unmatched suggestions, and abort on the
//! first lookup failure.

use encore_cli::Recommender;
use encore_llm_client::{provider_from_config, AnthropicClient};
use encore_shared_config::{LlmConfig, LlmProvider, SpotifyConfig};
use encore_spotify_client::{SpotifyClient, SpotifyError};
use encore_test_utils::{MockLlmServer, MockSpotifyServer};

fn spotify_for(server: &MockSpotifyServer) -> SpotifyClient {
    let config = SpotifyConfig::new("client-id", "client-secret", "refresh-token")
        .with_base_urls(server.url(), server.url());
    SpotifyClient::new(&config).unwrap()
}

fn anthropic_recommender(spotify: SpotifyClient, llm: &MockLlmServer) -> Recommender {
    let config = LlmConfig::new(LlmProvider::Anthropic, "test-key").with_base_url(llm.url());
    let provider = Box::new(AnthropicClient::new(&config).unwrap());
    Recommender::new(spotify, provider, config.max_tokens)
}

#[tokio::test]
async fn full_pipeline_produces_enriched_records() {
    let spotify = MockSpotifyServer::start().await;
    spotify.mock_token_success().await;
    spotify
        .mock_top_artists(&[
            ("My Bloody Valentine", &["shoegaze"]),
            ("Cocteau Twins", &["dream pop", "4ad"]),
        ])
        .await;
    spotify
        .mock_search_hit(
            "Slowdive",
            "Slowdive",
            &["shoegaze", "dream pop"],
            65,
            "https://open.spotify.com/artist/slowdive",
        )
        .await;
    spotify
        .mock_search_hit(
            "Ride",
            "Ride",
            &["shoegaze"],
            55,
            "https://open.spotify.com/artist/ride",
        )
        .await;

    let llm = MockLlmServer::start().await;
    llm.mock_anthropic_completion("Slowdive, Ride").await;

    let recommender = anthropic_recommender(spotify_for(&spotify), &llm);
    let recommendations = recommender.run(Some(20)).await.unwrap();

    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0].name, "Slowdive");
    assert_eq!(recommendations[0].popularity, 65);
    assert_eq!(recommendations[0].url, "https://open.spotify.com/artist/slowdive");
    assert_eq!(recommendations[1].name, "Ride");
}

#[tokio::test]
async fn empty_completion_yields_no_recommendations() {
    let spotify = MockSpotifyServer::start().await;
    spotify.mock_token_success().await;
    spotify.mock_top_artists(&[("Radiohead", &["art rock"])]).await;

    let llm = MockLlmServer::start().await;
    llm.mock_anthropic_empty().await;

    let recommender = anthropic_recommender(spotify_for(&spotify), &llm);
    let recommendations = recommender.run(Some(20)).await.unwrap();

    assert!(recommendations.is_empty());
    // No suggestions means the resolver never searched
    assert_eq!(spotify.search_requests().await, 0);
}

#[tokio::test]
async fn unmatched_suggestions_are_silently_dropped() {
    let spotify = MockSpotifyServer::start().await;
    spotify.mock_token_success().await;
    spotify
        .mock_search_hit(
            "X",
            "X",
            &["electronic"],
            40,
            "https://open.spotify.com/artist/x",
        )
        .await;
    spotify.mock_search_miss("Y").await;

    let llm = MockLlmServer::start().await;
    let recommender = anthropic_recommender(spotify_for(&spotify), &llm);

    let resolved = recommender
        .resolve(&["X".to_string(), "Y".to_string()])
        .await
        .unwrap();

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].name, "X");
}

#[tokio::test]
async fn lookup_failure_aborts_remaining_suggestions() {
    let spotify = MockSpotifyServer::start().await;
    spotify.mock_token_success().await;
    spotify
        .mock_search_hit("A", "A", &[], 10, "https://open.spotify.com/artist/a")
        .await;
    spotify.mock_search_failure("B", 500).await;
    spotify
        .mock_search_hit("C", "C", &[], 10, "https://open.spotify.com/artist/c")
        .await;

    let llm = MockLlmServer::start().await;
    let recommender = anthropic_recommender(spotify_for(&spotify), &llm);

    let result = recommender
        .resolve(&["A".to_string(), "B".to_string(), "C".to_string()])
        .await;

    assert!(matches!(result, Err(_)));
    // The third lookup was never issued
    assert_eq!(spotify.search_requests().await, 2);
}

#[tokio::test]
async fn profiler_failure_propagates_unchanged() {
    let spotify = MockSpotifyServer::start().await;
    spotify.mock_token_success().await;
    spotify.mock_top_artists_failure(503).await;

    let llm = MockLlmServer::start().await;
    let recommender = anthropic_recommender(spotify_for(&spotify), &llm);

    let result = recommender.run(Some(20)).await;
    match result {
        Err(encore_cli::CliError::Spotify(SpotifyError::Api { status, .. })) => {
            assert_eq!(status, 503)
        }
        other => panic!("expected Spotify Api error, got {:?}", other.map(|r| r.len())),
    }
}

#[tokio::test]
async fn openai_provider_runs_the_same_pipeline() {
    let spotify = MockSpotifyServer::start().await;
    spotify.mock_token_success().await;
    spotify.mock_top_artists(&[("Aphex Twin", &["idm"])]).await;
    spotify
        .mock_search_hit(
            "Autechre",
            "Autechre",
            &["idm"],
            60,
            "https://open.spotify.com/artist/autechre",
        )
        .await;

    let llm = MockLlmServer::start().await;
    llm.mock_openai_completion("Autechre").await;

    let config = LlmConfig::new(LlmProvider::OpenAi, "test-key").with_base_url(llm.url());
    let provider = provider_from_config(&config).unwrap();
    let recommender = Recommender::new(spotify_for(&spotify), provider, config.max_tokens);

    let recommendations = recommender.run(Some(20)).await.unwrap();
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].name, "Autechre");
}
