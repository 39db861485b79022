mod config;
mod dom;
mod errors;
mod loader;
mod models;
mod render;
mod routes;
mod sanitize;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::loader::HttpResumeSource;
use crate::render::{IconScanner, IconifyScanner};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume site v{}", env!("CARGO_PKG_VERSION"));

    let source = HttpResumeSource::new(&config.site_origin, &config.resume_data_path)?;
    info!("Resume data location: {}", source.location());

    let icon_scanner: Option<Arc<dyn IconScanner>> = if config.iconify_scan {
        Some(Arc::new(IconifyScanner))
    } else {
        None
    };
    info!(
        "Page template: {}, static dir: {}, icon scan: {}",
        config.page_template.display(),
        config.static_dir.display(),
        config.iconify_scan
    );

    let state = AppState {
        config: config.clone(),
        source: Arc::new(source),
        icon_scanner,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
