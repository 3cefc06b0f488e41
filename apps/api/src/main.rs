mod config;
mod contact;
mod email_client;
mod errors;
mod portfolio;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::email_client::ResendClient;
use crate::portfolio::repository::InMemoryPortfolio;
use crate::portfolio::seed::{default_projects, default_skills};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={level},tower_http={level}",
                env!("CARGO_PKG_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    if config.delivery.is_complete() {
        info!("Contact emails will be sent from {}", config.delivery.from_email());
    } else {
        warn!("RESEND_API_KEY or CONTACT_TO_EMAIL is not set; /api/contact will answer 500");
    }

    let email = ResendClient::new(&config.resend_api_url)?;
    info!("Email client initialized (endpoint: {})", email.endpoint());

    // One-time catalog seed; read-only from here on
    let portfolio = InMemoryPortfolio::new();
    portfolio.seed(default_projects(), default_skills()).await;

    if let Some(dir) = &config.static_dir {
        info!("Serving static files from {}", dir.display());
    }

    let state = AppState {
        config: config.clone(),
        email: Arc::new(email),
        portfolio: Arc::new(portfolio),
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
