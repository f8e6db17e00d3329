use encore_cli::{output, Config, Recommender};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "encore=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    tracing::info!("Starting Encore");

    let config = Config::from_env()?;
    let recommender = Recommender::from_config(&config.common)?;

    let recommendations = recommender.run(Some(config.top_artists_limit)).await?;

    println!("{}", output::render(&recommendations));

    Ok(())
}
