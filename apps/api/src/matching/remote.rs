//! Remote generative scorer — asks an external text generator for a score and
//! parses it back out of free-form text.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::llm_client::LlmError;
use crate::matching::prompts::build_match_prompt;
use crate::matching::{MatchError, ScoreResult};

static SCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"SCORE:\s*(\d+)").expect("valid regex"));

const MAX_REMOTE_SCORE: f64 = 100.0;

/// "Send prompt, get text." The only thing scoring and drafting know about a vendor.
///
/// Implemented by `LlmClient`; tests plug in fakes.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Scores via the generator. Errors are for the orchestrator to absorb.
pub async fn score_remote(
    requirements: &str,
    resume_text: &str,
    generator: &dyn TextGenerator,
) -> Result<ScoreResult, MatchError> {
    let prompt = build_match_prompt(requirements, resume_text);
    let text = generator
        .generate(&prompt)
        .await
        .map_err(|e| MatchError::RemoteCall(e.to_string()))?;
    parse_remote_response(&text)
}

/// Pulls the first integer after `SCORE:` and treats the rest as the analysis.
/// Without a marker the whole text is the analysis and the score is 0.0.
pub fn parse_remote_response(text: &str) -> Result<ScoreResult, MatchError> {
    if text.trim().is_empty() {
        return Err(MatchError::RemoteCall(
            "generator returned an empty response".to_string(),
        ));
    }

    let Some(caps) = SCORE_RE.captures(text) else {
        return Ok(ScoreResult::zero(text));
    };

    let score = caps[1]
        .parse::<f64>()
        .map_err(|e| MatchError::RemoteCall(format!("unparsable score '{}': {e}", &caps[1])))?
        .min(MAX_REMOTE_SCORE);

    let analysis = text
        .replace(&caps[0], "")
        .replace("ANALYSIS:", "")
        .trim()
        .to_string();

    Ok(ScoreResult { score, analysis })
}
