use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::llm_client::{prompts::SMOKE_TEST_PROMPT, MODEL};
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "portfolio-generator"
    }))
}

/// GET /health/model
/// Sends a one-line prompt to the model to confirm the key and model work.
pub async fn model_health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let reply = state.llm.generate(SMOKE_TEST_PROMPT).await?;
    Ok(Json(json!({
        "status": "ok",
        "model": MODEL,
        "reply": reply
    })))
}
