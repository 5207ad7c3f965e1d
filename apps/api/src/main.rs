mod analysis;
mod config;
mod errors;
mod feedback;
mod ingest;
mod models;
mod profile;
mod routes;
mod rubric;
mod scoring;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::rubric::load_rubric;
use crate::scoring::{ProfileScorer, RubricScorer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Triage API v{}", env!("CARGO_PKG_VERSION"));

    // The rubric is required; refuse to start without it
    let rubric = load_rubric(&config.rubric_path)
        .with_context(|| format!("Failed to load rubric from '{}'", config.rubric_path))?;

    let scorer: Arc<dyn ProfileScorer> = Arc::new(RubricScorer);
    info!(backend = scorer.backend(), "Scorer initialized");

    let state = AppState {
        config: config.clone(),
        rubric: Arc::new(rubric),
        scorer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!(
        "Listening on {addr} (max upload {} bytes)",
        config.max_upload_bytes
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
