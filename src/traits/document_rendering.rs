use async_trait::async_trait;

use crate::errors::RenderError;
use crate::models::document::StorybookContent;

/// Collaborator that performs layout-to-binary conversion of the
/// composed document content.
#[async_trait]
pub trait DocumentRenderingService: Send + Sync {
    /// The media type of the artifacts this renderer produces
    fn media_type(&self) -> &str;

    /// Render the structured content into document bytes
    async fn render(&self, content: &StorybookContent) -> Result<Vec<u8>, RenderError>;
}
