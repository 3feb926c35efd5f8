use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinefront_core::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file early for environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cinefront_server=debug,cinefront_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // HOST, PORT, DATA_DIR, STATIC_DIR and TMDB_API_KEY are all read here
    let config =
        Config::from_env().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    cinefront_server::start_server(config).await
}
