use std::sync::Arc;

use marquee_api::api::{create_router, AppState};
use marquee_api::config::Config;
use marquee_api::services::providers::http::HttpBackend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration and wire up the backend client
    let config = Config::from_env()?;
    let backend = Arc::new(HttpBackend::new(config.backend_api_url.clone()));
    let state = AppState::new(backend, &config);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, backend = %config.backend_api_url, "Recommendation gateway listening");
    axum::serve(listener, app).await?;

    Ok(())
}
