//! Axum route handlers for résumé upload and session lifecycle.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{extract_resume, UploadedFile};
use crate::session::SessionSummary;
use crate::site::bundle::{BUNDLE_FILENAME, BUNDLE_MIME};
use crate::state::AppState;

/// Multipart field carrying the résumé file.
pub const RESUME_FIELD: &str = "resume";

/// POST /api/v1/sessions
///
/// Accepts a PDF/DOCX upload, extracts its text and opens a session in
/// `resume_loaded`. Empty extraction is a hard failure for the interaction.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SessionSummary>), AppError> {
    let file = read_resume_field(&mut multipart).await?;
    let filename = file.filename.clone();
    info!("Received {} ({} bytes)", filename, file.data.len());

    // pdf-extract is CPU-bound and can panic on hostile input.
    let text = tokio::task::spawn_blocking(move || extract_resume(&file))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

    if text.trim().is_empty() {
        return Err(AppError::Extraction(format!(
            "no text could be extracted from {filename}"
        )));
    }

    let summary = state.sessions.create(filename, text).await;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSummary>, AppError> {
    Ok(Json(state.sessions.summary(id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sessions/:id/download
///
/// Serves the packaged site as `portfolio_website.zip`.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let bundle = state.sessions.bundle(id).await?;
    Ok((
        [
            (header::CONTENT_TYPE, BUNDLE_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{BUNDLE_FILENAME}\""),
            ),
        ],
        bundle,
    ))
}

async fn read_resume_field(multipart: &mut Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(String::from)
            .ok_or_else(|| AppError::Validation("Resume upload has no file name".to_string()))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid file: {e}")))?;

        return Ok(UploadedFile { filename, data });
    }

    Err(AppError::Validation("No resume file provided".to_string()))
}
