// Relevance scoring engine: job requirements text vs extracted resume text.
// Two strategies (local lexical VSM, remote generative) behind one orchestrator
// that always returns a ScoreResult and never surfaces an error.

pub mod handlers;
pub mod local;
pub mod orchestrator;
pub mod prompts;
pub mod remote;
pub mod vectorizer;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Final output of a scoring request. Persisted verbatim by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0.0 – 100.0 (local strategy never exceeds 95.0)
    pub score: f64,
    pub analysis: String,
}

impl ScoreResult {
    pub fn zero(analysis: impl Into<String>) -> Self {
        Self {
            score: 0.0,
            analysis: analysis.into(),
        }
    }
}

/// Failure modes inside the engine. None of these cross `compute_match`.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("no text generator configured")]
    RemoteUnavailable,

    #[error("remote generation failed: {0}")]
    RemoteCall(String),

    #[error("remote generation timed out after {0:?}")]
    RemoteTimeout(Duration),

    #[error("resume text could not be extracted or is too short")]
    DegenerateInput,

    #[error("{0}")]
    Internal(String),
}
