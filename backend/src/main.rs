//! LeafGuard - Pest Risk Server binary

use std::net::SocketAddr;

use leafguard_backend::{create_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leafguard_server=debug,leafguard_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting LeafGuard Pest Risk Server");
    tracing::info!("Environment: {}", config.environment);

    if config.weather.api_key.is_none() {
        tracing::warn!("No weather API key configured, all assessments use synthetic weather");
    }
    if config.classifier.api_endpoint.is_none() {
        tracing::warn!("No classifier endpoint configured, image diagnosis is disabled");
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Build application
    let app = create_app(AppState::new(config));

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
