use async_trait::async_trait;

use crate::errors::TransportError;

/// Collaborator that turns a fully-built prompt into raw model output.
///
/// Implementations make a single attempt per call; retry policy belongs
/// to the caller.
#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Send the prompt and return the raw text response
    async fn complete(&self, prompt: &str) -> Result<String, TransportError>;
}
