pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    response::Html,
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::session::handlers as session;
use crate::state::AppState;

/// The single interactive page: upload, generate, download, preview.
const INDEX_HTML: &str = include_str!("index.html");

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health::health_handler))
        .route("/health/model", get(health::model_health_handler))
        .route("/api/v1/sessions", post(session::handle_upload))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get_session).delete(session::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/generate",
            post(generation::handle_generate),
        )
        .route(
            "/api/v1/sessions/:id/download",
            get(session::handle_download),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
