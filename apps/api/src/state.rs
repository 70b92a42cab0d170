use std::sync::Arc;

use crate::config::Config;
use crate::matching::remote::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Present only when GEMINI_API_KEY is set. `None` selects local scoring
    /// and template job drafts.
    pub generator: Option<Arc<dyn TextGenerator>>,
}
