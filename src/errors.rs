use thiserror::Error;

use crate::config::ConfigError;

/// Failures while locating a JSON payload in raw model output
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("No JSON object found in model response")]
    NoJsonFound,

    #[error("Extracted text is not valid JSON: {0}")]
    MalformedJson(String),
}

/// Failures while checking a parsed candidate against the storybook schema
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing or empty required field: {0}")]
    MissingField(String),

    #[error("Expected 5 pages, got {0}")]
    WrongPageCount(usize),

    #[error("Invalid page {index}: missing or empty field '{field}'")]
    InvalidPage { index: usize, field: String },
}

/// Transport-level failures from the text-generation collaborator
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse API response: {0}")]
    Parse(String),

    #[error("Missing API key: {0}")]
    MissingApiKey(String),
}

/// A single classified failure for one generation attempt.
///
/// The prompt text is never carried in these payloads, only the failure
/// kind and collaborator diagnostics.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Text generation service error: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failures from the document-rendering collaborator
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Rendering failed: {0}")]
    Collaborator(String),
}

/// Custom error types for the storybook system
#[derive(Debug, Error)]
pub enum StorybookError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Story generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Document rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type specific to storybook operations
pub type StorybookResult<T> = Result<T, StorybookError>;
