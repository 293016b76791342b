//! Agricultural Advisory Platform - Backend Server

use agri_server::{create_app, AppState, Config};
use shared::ReferenceData;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agri_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Agricultural Advisory Server");
    tracing::info!("Environment: {}", config.environment);

    let visuals_dir = config.assets.visuals_dir();
    std::fs::create_dir_all(&visuals_dir)?;
    tracing::info!("Charts will be written to {}", visuals_dir.display());

    let reference = ReferenceData::builtin();
    tracing::info!(
        crops = reference.crops().len(),
        regions = reference.regions().len(),
        "Reference data loaded"
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_app(AppState::new(reference, config));

    // Start server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
