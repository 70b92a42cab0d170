//! Strategy selection and fallback.
//!
//! Prefers the remote generator when one is configured and demotes to the local
//! scorer on any remote failure or timeout. Always yields a `ScoreResult`.
//!
//! Local results are bit-identical across calls. Remote results are not: the
//! generator is non-deterministic, and that variance is accepted.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::matching::local::score_local;
use crate::matching::remote::{score_remote, TextGenerator};
use crate::matching::{MatchError, ScoreResult};

/// Which strategy actually produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerBackend {
    Remote,
    Local,
}

/// The two interchangeable scoring strategies.
pub enum ScoringStrategy<'a> {
    Remote(&'a dyn TextGenerator),
    Local,
}

impl<'a> ScoringStrategy<'a> {
    pub fn select(generator: Option<&'a dyn TextGenerator>) -> Self {
        match generator {
            Some(g) => ScoringStrategy::Remote(g),
            None => ScoringStrategy::Local,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub result: ScoreResult,
    pub backend: ScorerBackend,
}

/// Scores `resume_text` against `requirements`.
///
/// `timeout` bounds the remote call only; the local path is in-memory and bounded
/// by input length.
pub async fn compute_match(
    requirements: &str,
    resume_text: &str,
    generator: Option<&dyn TextGenerator>,
    timeout: Duration,
) -> MatchOutcome {
    let remote = match ScoringStrategy::select(generator) {
        ScoringStrategy::Remote(generator) => {
            try_remote(requirements, resume_text, generator, timeout).await
        }
        ScoringStrategy::Local => Err(MatchError::RemoteUnavailable),
    };

    match remote {
        Ok(result) => {
            debug!("Remote scoring succeeded (score={})", result.score);
            return MatchOutcome {
                result,
                backend: ScorerBackend::Remote,
            };
        }
        Err(MatchError::RemoteUnavailable) => debug!("No generator configured, scoring locally"),
        Err(e) => warn!("Remote scoring failed, falling back to local: {e}"),
    }

    MatchOutcome {
        result: score_local(requirements, resume_text),
        backend: ScorerBackend::Local,
    }
}

async fn try_remote(
    requirements: &str,
    resume_text: &str,
    generator: &dyn TextGenerator,
    timeout: Duration,
) -> Result<ScoreResult, MatchError> {
    match tokio::time::timeout(timeout, score_remote(requirements, resume_text, generator)).await
    {
        Ok(result) => result,
        Err(_) => Err(MatchError::RemoteTimeout(timeout)),
    }
}
