use log::{debug, error, info};

use crate::errors::StorybookResult;
use crate::implementations::composer::DocumentComposer;
use crate::implementations::generator::StoryGenerator;
use crate::implementations::resolver::IllustrationResolver;
use crate::models::document::RenderedDocument;
use crate::models::request::StoryRequest;
use crate::traits::document_rendering::DocumentRenderingService;
use crate::traits::illustration_builder::IllustrationReferenceBuilder;
use crate::traits::text_generation::TextGenerationService;

/// Stages of a single storybook pipeline invocation.
///
/// Transitions are strictly sequential on success; any component
/// failure moves directly to `Failed` and the invocation returns the
/// originating typed error with no partial artifacts exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Generating,
    Resolving,
    Composing,
    Done,
    Failed,
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PipelineState::Idle => "idle",
            PipelineState::Generating => "generating",
            PipelineState::Resolving => "resolving",
            PipelineState::Composing => "composing",
            PipelineState::Done => "done",
            PipelineState::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Sequences generation, illustration resolution, and composition for
/// one request.
///
/// Holds no per-request mutable state: each `create_storybook` call
/// tracks its own state, so one pipeline value can serve many
/// concurrent invocations.
pub struct StorybookPipeline<T, B, R>
where
    T: TextGenerationService,
    B: IllustrationReferenceBuilder,
    R: DocumentRenderingService,
{
    generator: StoryGenerator<T>,
    resolver: IllustrationResolver<B>,
    composer: DocumentComposer<R>,
}

impl<T, B, R> StorybookPipeline<T, B, R>
where
    T: TextGenerationService,
    B: IllustrationReferenceBuilder,
    R: DocumentRenderingService,
{
    pub fn new(
        generator: StoryGenerator<T>,
        resolver: IllustrationResolver<B>,
        composer: DocumentComposer<R>,
    ) -> Self {
        Self {
            generator,
            resolver,
            composer,
        }
    }

    /// Run the full pipeline for one request, returning the rendered
    /// document or the first typed error encountered
    pub async fn create_storybook(
        &self,
        request: &StoryRequest,
    ) -> StorybookResult<RenderedDocument> {
        let mut state = PipelineState::Idle;

        state = advance(state, PipelineState::Generating);
        let story = match self.generator.generate(request).await {
            Ok(story) => story,
            Err(e) => {
                fail(state, &e);
                return Err(e.into());
            }
        };
        info!("Story generated: '{}'", story.title);

        state = advance(state, PipelineState::Resolving);
        let illustrations = self.resolver.resolve(&story);
        info!("Resolved {} illustration references", illustrations.len());

        state = advance(state, PipelineState::Composing);
        let document = match self.composer.compose(&story, &illustrations).await {
            Ok(document) => document,
            Err(e) => {
                fail(state, &e);
                return Err(e.into());
            }
        };

        advance(state, PipelineState::Done);
        Ok(document)
    }
}

fn advance(from: PipelineState, to: PipelineState) -> PipelineState {
    debug!("Pipeline state: {} -> {}", from, to);
    to
}

fn fail(from: PipelineState, cause: &dyn std::fmt::Display) {
    error!("Pipeline state: {} -> {} ({})", from, PipelineState::Failed, cause);
}
