use actix_web::{web, App, HttpServer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod auth;
mod config;
mod domain;
mod http;
mod metrics;
mod state;
mod store;

use config::Config;
use state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,food_orders=debug")),
        )
        .init();

    tracing::info!("🚀 Starting food-orders backend");

    let config = Config::load();
    let port = config.port;

    let state = web::Data::new(AppState::from_config(&config).await?);
    tracing::info!(
        metric_count = state.metrics.registry().gather().len(),
        "📊 Metrics registry ready"
    );

    tracing::info!(port, "📡 Serving HTTP on http://0.0.0.0:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(http::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
