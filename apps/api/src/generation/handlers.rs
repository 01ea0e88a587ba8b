//! Axum route handler for portfolio generation.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::generate_portfolio;
use crate::site::GeneratedSite;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub site: GeneratedSite,
    pub download_url: String,
}

/// POST /api/v1/sessions/:id/generate
///
/// Blocks for the duration of the model call. On failure, or if the request
/// is dropped, the session goes back to `resume_loaded`; nothing is retried.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GenerateResponse>, AppError> {
    let run = state.sessions.begin_generation(id).await?;

    let portfolio = match generate_portfolio(state.llm.as_ref(), run.resume_text()).await {
        Ok(portfolio) => portfolio,
        Err(e) => {
            if let Err(abort_err) = run.abort().await {
                warn!("Could not reset session {id} after failed generation: {abort_err}");
            }
            return Err(e);
        }
    };

    let site = portfolio.site.clone();
    run.finish(portfolio).await?;

    Ok(Json(GenerateResponse {
        session_id: id,
        site,
        download_url: format!("/api/v1/sessions/{id}/download"),
    }))
}
