//! Job description drafting — generated when a text generator is configured,
//! filled from a fixed template otherwise.

pub mod handlers;
pub mod prompts;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::drafting::prompts::{
    build_draft_prompt, REQUIREMENTS_SEPARATOR, TEMPLATE_DESCRIPTION_TAIL, TEMPLATE_REQUIREMENTS,
};
use crate::errors::AppError;
use crate::matching::remote::TextGenerator;

pub const REQUIREMENTS_NOT_GENERATED: &str = "Requirements not generated automatically.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDraft {
    pub description: String,
    pub requirements: String,
}

/// Drafts a description and requirements list for `title`.
///
/// Unlike scoring, a failed remote call is reported to the caller: there is no
/// meaningful local substitute for generated prose once generation was requested.
pub async fn draft_job_description(
    title: &str,
    details: Option<&str>,
    generator: Option<&dyn TextGenerator>,
    timeout: Duration,
) -> Result<JobDraft, AppError> {
    let details = details.map(str::trim).filter(|d| !d.is_empty());

    let Some(generator) = generator else {
        info!("No generator configured, using template job draft");
        return Ok(template_draft(title, details));
    };

    let prompt = build_draft_prompt(title, details);
    let text = tokio::time::timeout(timeout, generator.generate(&prompt))
        .await
        .map_err(|_| AppError::Llm(format!("job draft timed out after {timeout:?}")))?
        .map_err(|e| AppError::Llm(format!("job draft failed: {e}")))?;

    Ok(split_generated_draft(&text))
}

fn split_generated_draft(text: &str) -> JobDraft {
    match text.split_once(REQUIREMENTS_SEPARATOR) {
        Some((description, rest)) => {
            // Anything after a second separator is dropped.
            let requirements = rest.split(REQUIREMENTS_SEPARATOR).next().unwrap_or(rest);
            JobDraft {
                description: description.trim().to_string(),
                requirements: requirements.trim().to_string(),
            }
        }
        None => JobDraft {
            description: text.trim().to_string(),
            requirements: REQUIREMENTS_NOT_GENERATED.to_string(),
        },
    }
}

fn template_draft(title: &str, details: Option<&str>) -> JobDraft {
    let mut description =
        format!("We are seeking a talented {title} to join our dynamic team.");
    if let Some(details) = details {
        description.push_str(&format!(" As per your requirements: {details}."));
    }
    description.push_str(TEMPLATE_DESCRIPTION_TAIL);

    let requirements = match details {
        Some(details) => format!("- {details} (Key Requirement)\n{TEMPLATE_REQUIREMENTS}"),
        None => TEMPLATE_REQUIREMENTS.to_string(),
    };

    JobDraft {
        description,
        requirements,
    }
}
