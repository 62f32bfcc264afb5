use log::{debug, info};

use crate::errors::RenderError;
use crate::models::document::{sanitize_title, RenderedDocument, Section, StorybookContent};
use crate::models::illustration::IllustrationRef;
use crate::models::story::StoryDocument;
use crate::traits::document_rendering::DocumentRenderingService;

/// Composes the validated story and its illustrations into the final
/// document artifact.
///
/// Pages and illustration refs are paired by position; callers guarantee
/// the two sequences are same-length and position-aligned. The composer
/// performs no fetching or re-validation of its inputs.
pub struct DocumentComposer<R: DocumentRenderingService> {
    renderer: R,
}

impl<R: DocumentRenderingService> DocumentComposer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Build the title-plus-pages content and render it to bytes
    pub async fn compose(
        &self,
        story: &StoryDocument,
        illustrations: &[IllustrationRef],
    ) -> Result<RenderedDocument, RenderError> {
        let content = build_content(story, illustrations);
        debug!(
            "Composed '{}' into {} content sections",
            content.title,
            content.sections.len()
        );

        let bytes = self.renderer.render(&content).await?;
        info!(
            "Rendered '{}' to {} bytes of {}",
            content.title,
            bytes.len(),
            self.renderer.media_type()
        );

        Ok(RenderedDocument {
            bytes,
            media_type: self.renderer.media_type().to_string(),
            title_slug: sanitize_title(&story.title),
        })
    }
}

/// One title section followed by one content section per page, in input
/// page order
pub fn build_content(story: &StoryDocument, illustrations: &[IllustrationRef]) -> StorybookContent {
    let sections = story
        .pages
        .iter()
        .zip(illustrations.iter())
        .map(|(page, illustration)| Section {
            page_number: page.page_number,
            text: page.text.clone(),
            illustration: illustration.clone(),
        })
        .collect();

    StorybookContent {
        title: story.title.clone(),
        characters: story.characters.clone(),
        sections,
    }
}
