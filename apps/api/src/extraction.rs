#![allow(dead_code)]

//! Resume text extraction.
//!
//! Upstream of the scorer. Failures never propagate: they become short sentinel
//! strings that the local scorer then reports as "too short".

use std::panic;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

pub const CONTENT_UNAVAILABLE: &str = "Resume content not available";
pub const UNREADABLE_PDF: &str = "Error reading PDF file.";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no resume file was provided")]
    Empty,

    #[error("failed to read resume file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to extract PDF text: {0}")]
    Pdf(String),

    #[error("PDF parser panicked")]
    Panicked,
}

impl ExtractionError {
    fn sentinel(&self) -> &'static str {
        match self {
            ExtractionError::Empty => CONTENT_UNAVAILABLE,
            _ => UNREADABLE_PDF,
        }
    }
}

/// Extracts text from an uploaded PDF, or returns a sentinel string.
/// Blocking; run it on a blocking thread from async code.
pub fn extract_resume_text(bytes: &[u8]) -> String {
    try_extract(bytes).unwrap_or_else(|e| {
        warn!("Resume extraction failed: {e}");
        e.sentinel().to_string()
    })
}

pub fn extract_resume_text_from_path(path: &Path) -> String {
    std::fs::read(path)
        .map_err(ExtractionError::from)
        .and_then(|bytes| try_extract(&bytes))
        .unwrap_or_else(|e| {
            warn!("Resume extraction failed for {}: {e}", path.display());
            e.sentinel().to_string()
        })
}

fn try_extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    if bytes.is_empty() {
        return Err(ExtractionError::Empty);
    }

    // pdf-extract panics on some malformed inputs instead of returning Err.
    panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| ExtractionError::Panicked)?
        .map_err(|e| ExtractionError::Pdf(format!("{e:?}")))
}
