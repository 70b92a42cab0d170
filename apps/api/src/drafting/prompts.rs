// Prompt constants for job description drafting.

/// Splits the generated body from the requirements section.
pub const REQUIREMENTS_SEPARATOR: &str = "||REQUIREMENTS||";

/// Appended after the role context. Mentions `REQUIREMENTS_SEPARATOR` verbatim.
pub const DRAFT_INSTRUCTION: &str = "Write a professional job description (just the body) \
    and then a separate section for Requirements for this role. \
    Use the provided context details to tailor the content. \
    Separator: ||REQUIREMENTS||";

pub fn build_draft_prompt(title: &str, details: Option<&str>) -> String {
    let mut prompt = format!("Role Title: {title}\n");
    if let Some(details) = details {
        prompt.push_str(&format!("Context/Details: {details}\n"));
    }
    prompt.push('\n');
    prompt.push_str(DRAFT_INSTRUCTION);
    prompt
}

// Template copy used when no generator is configured.

pub const TEMPLATE_DESCRIPTION_TAIL: &str = " The ideal candidate will be responsible for \
    designing, developing, and deploying high-quality solutions. You will work closely with \
    cross-functional teams to define, design, and ship new features. This is an exciting \
    opportunity to work on cutting-edge technologies and grow your career in a fast-paced \
    environment.";

pub const TEMPLATE_REQUIREMENTS: &str = "- Bachelor's degree in Computer Science or related field.\n\
    - 3+ years of experience in a similar role.\n\
    - Strong proficiency in modern technologies and best practices.\n\
    - Excellent problem-solving and communication skills.\n\
    - Ability to work independently and as part of a team.";
