mod config;
mod errors;
mod models;
mod page;
mod profile_client;
mod proxy;
mod render;
mod routes;
mod seo;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::profile_client::ProfileClient;
use crate::proxy::build_proxy_client;
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

    info!("Starting portfolio renderer v{}", env!("CARGO_PKG_VERSION"));

    let timeout = Duration::from_secs(config.fetch_timeout_secs);
    let profiles = ProfileClient::new(&config.profile_api_base_url, timeout)?;
    info!("Profile API: {}", config.profile_api_base_url);

    let http = build_proxy_client(&config.image_proxy_allowed_hosts, timeout)?;
    if config.image_proxy_allowed_hosts.is_empty() {
        info!("Image proxy accepts any host");
    } else {
        info!(
            "Image proxy hosts: {}",
            config.image_proxy_allowed_hosts.join(", ")
        );
    }
    if let Some(dir) = &config.static_dir {
        info!("Serving static assets from {dir}");
    }

    let state = AppState {
        config: config.clone(),
        profiles: Arc::new(profiles),
        http,
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
