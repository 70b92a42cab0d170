//! Axum route handlers for the Drafting API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::drafting::{draft_job_description, JobDraft};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    pub title: String,
    pub prompt: Option<String>,
}

/// POST /api/v1/jobs/draft-description
///
/// Returns a job description body and requirements list for the given title.
pub async fn handle_draft_description(
    State(state): State<AppState>,
    Json(request): Json<DraftRequest>,
) -> Result<Json<JobDraft>, AppError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let draft = draft_job_description(
        title,
        request.prompt.as_deref(),
        state.generator.as_deref(),
        state.config.remote_timeout(),
    )
    .await?;

    Ok(Json(draft))
}
