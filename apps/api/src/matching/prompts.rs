// Prompt constants for remote resume scoring.

/// Resume scoring prompt. Replace `{requirements}` and `{resume_text}` before sending.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"You are a helpful ATS scanner.
Job Requirements: {requirements}
Candidate Resume: {resume_text}

Task:
1. Calculate a match percentage (0-100) based on how well the candidate fits the requirements.
2. Write a brief analysis/reasoning.

Output format:
SCORE: <integer 0-100>
ANALYSIS: <text>"#;

pub fn build_match_prompt(requirements: &str, resume_text: &str) -> String {
    MATCH_PROMPT_TEMPLATE
        .replace("{requirements}", requirements)
        .replace("{resume_text}", resume_text)
}
