//! Axum route handlers for the Matching API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_resume_text, CONTENT_UNAVAILABLE};
use crate::matching::orchestrator::{compute_match, ScorerBackend};
use crate::state::AppState;

/// Used when a job has no requirements text.
pub const DEFAULT_REQUIREMENTS: &str = "General Job Requirements";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub score: f64,
    pub analysis: String,
    pub scorer_backend: ScorerBackend,
    pub analyzed_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Scores already-extracted resume text against job requirements.
/// Always 200: scoring problems show up in `analysis`, not as errors.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Json<MatchResponse> {
    Json(score_texts(&state, &request.requirements, &request.resume_text).await)
}

/// POST /api/v1/match/upload
///
/// Multipart form: `requirements` (text) and `resume` (PDF file).
/// Extracts the resume text, then scores it like `/api/v1/match`.
pub async fn handle_match_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let mut requirements = String::new();
    let mut resume: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("requirements") => {
                requirements = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid requirements field: {e}")))?;
            }
            Some("resume") => {
                resume = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("Invalid resume field: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let resume_text = match resume {
        Some(bytes) => tokio::task::spawn_blocking(move || extract_resume_text(&bytes))
            .await
            .map_err(|e| AppError::Internal(e.into()))?,
        None => CONTENT_UNAVAILABLE.to_string(),
    };

    Ok(Json(score_texts(&state, &requirements, &resume_text).await))
}

async fn score_texts(state: &AppState, requirements: &str, resume_text: &str) -> MatchResponse {
    let requirements = if requirements.trim().is_empty() {
        DEFAULT_REQUIREMENTS
    } else {
        requirements
    };

    let request_id = Uuid::new_v4();
    let outcome = compute_match(
        requirements,
        resume_text,
        state.generator.as_deref(),
        state.config.remote_timeout(),
    )
    .instrument(info_span!("match", %request_id))
    .await;

    info!(
        %request_id,
        score = outcome.result.score,
        backend = ?outcome.backend,
        "Resume scored"
    );

    MatchResponse {
        score: outcome.result.score,
        analysis: outcome.result.analysis,
        scorer_backend: outcome.backend,
        analyzed_at: Utc::now(),
    }
}
