/// HTTP server for the trip planner
/// Serves the plan pipeline as a JSON API for web front ends

use std::sync::Arc;

use anyhow::{Context, Result};
use trip_client::{api, logging, Planner, PlannerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();
    logging::init_tracing();

    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║        Trip Planner - HTTP API Server                      ║");
    println!("║   Flights via SerpApi, research and itineraries via Gemini ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");

    let config = PlannerConfig::from_env()?;
    tracing::info!(
        "[CONFIG] Port: {}, model: {}, locale: {}",
        config.http_port,
        config.gemini_model,
        config.search_locale
    );

    let planner = Arc::new(Planner::from_config(&config)?);
    let app = api::router(planner);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.http_port))?;

    tracing::info!("[STARTUP] Trip planner running on http://0.0.0.0:{}", config.http_port);
    tracing::info!("  POST /plan      - Generate a travel plan");
    tracing::info!("  GET  /airports  - List catalog airports");
    tracing::info!("  GET  /health    - Check server health");

    axum::serve(listener, app).await.context("Server failed")?;
    Ok(())
}
