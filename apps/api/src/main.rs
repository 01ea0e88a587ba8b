mod config;
mod errors;
mod extract;
mod generation;
mod llm_client;
mod routes;
mod session;
mod site;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; a missing GOOGLE_API_KEY stops startup here
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio Generator v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.google_api_key.clone(), &config.gemini_api_base);
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let sessions = SessionStore::with_ttl(config.session_ttl);
    sessions.spawn_sweeper(SESSION_SWEEP_INTERVAL);
    info!("Sessions expire after {}s", config.session_ttl.as_secs());

    let state = AppState {
        llm: Arc::new(llm),
        sessions,
        config: config.clone(),
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
