//! Local lexical scorer — cosine similarity over term-frequency vectors.
//!
//! Pure, deterministic, no I/O. Identical inputs always yield identical output.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::warn;

use crate::matching::vectorizer::{cosine_similarity, vectorize, TermVector};
use crate::matching::{MatchError, ScoreResult};

/// Resumes with fewer distinct tokens than this are treated as failed extractions.
pub const MIN_DISTINCT_TOKENS: usize = 5;
/// Raw resume/requirements cosine rarely exceeds ~0.4, so it is stretched before display.
pub const SCORE_GAIN: f64 = 2.5;
/// The local scorer never awards more than this.
pub const SCORE_CEILING: f64 = 95.0;
pub const MAX_REPORTED_TERMS: usize = 8;

pub const TOO_SHORT_MESSAGE: &str = "Resume text could not be extracted or is too short.";

pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "and", "the", "to", "of", "in", "for", "with", "a", "an", "is", "it", "on", "as", "be",
        "are",
    ]
    .into_iter()
    .collect()
});

/// Qualitative band shown at the top of the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitBand {
    Excellent,
    Potential,
    Low,
}

impl FitBand {
    pub fn from_score(score: f64) -> Self {
        if score > 75.0 {
            FitBand::Excellent
        } else if score > 50.0 {
            FitBand::Potential
        } else {
            FitBand::Low
        }
    }

    fn headline(self) -> &'static str {
        match self {
            FitBand::Excellent => "✅ **Excellent Fit**: The candidate's profile strongly aligns with the job requirements.",
            FitBand::Potential => "⚠️ **Potential Match**: Good alignment found, though some specific skills may be implicit or missing.",
            FitBand::Low => "❌ **Low Compatibility**: The resume content diverges significantly from the target role.",
        }
    }
}

/// Requirement terms found / not found in the resume, most salient first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchReport {
    pub matched_terms: Vec<String>,
    pub missing_terms: Vec<String>,
}

impl MatchReport {
    /// Vocabulary is the requirement terms minus stopwords. Both lists are ordered by
    /// descending token length (ties alphabetical) and capped at `MAX_REPORTED_TERMS`.
    pub fn build(requirements: &TermVector, resume: &TermVector) -> Self {
        let (matched, missing): (Vec<&str>, Vec<&str>) = requirements
            .terms()
            .filter(|t| !STOPWORDS.contains(*t))
            .partition(|t| resume.contains(t));

        Self {
            matched_terms: most_salient(matched),
            missing_terms: most_salient(missing),
        }
    }
}

fn most_salient(mut terms: Vec<&str>) -> Vec<String> {
    terms.sort_unstable_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    terms
        .into_iter()
        .take(MAX_REPORTED_TERMS)
        .map(|t| t.to_string())
        .collect()
}

/// Maps raw cosine similarity to the 0–95 display score, one decimal place.
pub fn display_score(similarity: f64) -> f64 {
    let scaled = (similarity * 100.0 * SCORE_GAIN).min(SCORE_CEILING);
    (scaled * 10.0).round() / 10.0
}

/// Scores a resume against job requirements. Never fails: degenerate input and
/// internal faults both come back as a zero score with an explanatory analysis.
pub fn score_local(requirements: &str, resume_text: &str) -> ScoreResult {
    match try_score_local(requirements, resume_text) {
        Ok(result) => result,
        Err(MatchError::DegenerateInput) => ScoreResult::zero(TOO_SHORT_MESSAGE),
        Err(e) => {
            warn!("Local scoring failed: {e}");
            ScoreResult::zero(format!("Analysis Failed: {e}"))
        }
    }
}

fn try_score_local(requirements: &str, resume_text: &str) -> Result<ScoreResult, MatchError> {
    let req_vector = vectorize(requirements);
    let resume_vector = vectorize(resume_text);

    if resume_vector.len() < MIN_DISTINCT_TOKENS {
        return Err(MatchError::DegenerateInput);
    }

    let similarity = cosine_similarity(&req_vector, &resume_vector);
    if !similarity.is_finite() {
        return Err(MatchError::Internal(format!(
            "similarity is not a finite number ({similarity})"
        )));
    }

    let score = display_score(similarity);
    let report = MatchReport::build(&req_vector, &resume_vector);

    Ok(ScoreResult {
        score,
        analysis: render_analysis(score, &report),
    })
}

fn render_analysis(score: f64, report: &MatchReport) -> String {
    let mut analysis = String::from("**AI Semantic Analysis**\n\n");
    analysis.push_str(FitBand::from_score(score).headline());
    analysis.push('\n');

    if !report.matched_terms.is_empty() {
        analysis.push_str(&format!(
            "\n**Matched Keywords**: {}",
            report.matched_terms.join(", ")
        ));
    }
    if !report.missing_terms.is_empty() {
        analysis.push_str(&format!(
            "\n**Missing/Unmatched Terms**: {}",
            report.missing_terms.join(", ")
        ));
    }

    analysis
}
