use crate::errors::{StorybookError, StorybookResult};

/// Maximum accepted prompt length in characters
pub const MAX_PROMPT_LEN: usize = 500;

/// A validated story prompt for a single pipeline invocation.
///
/// Constructed per incoming request and discarded once the pipeline
/// completes; the text is immutable after construction.
#[derive(Debug, Clone)]
pub struct StoryRequest {
    prompt: String,
}

impl StoryRequest {
    /// Validate and wrap a raw prompt string
    pub fn new(prompt: impl Into<String>) -> StorybookResult<Self> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(StorybookError::InvalidInput(
                "Prompt is required".to_string(),
            ));
        }
        if prompt.chars().count() > MAX_PROMPT_LEN {
            return Err(StorybookError::InvalidInput(format!(
                "Prompt is too long. Please keep it under {} characters.",
                MAX_PROMPT_LEN
            )));
        }
        Ok(Self { prompt })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}
