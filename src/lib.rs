pub mod config;
pub mod errors;
pub mod implementations;
pub mod models;
pub mod pipeline;
pub mod traits;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ApiConfig, ConfigError, IllustrationConfig, StorybookConfig};
pub use errors::{
    ExtractionError, GenerationError, RenderError, StorybookError, StorybookResult,
    TransportError, ValidationError,
};
pub use implementations::{
    composer::DocumentComposer,
    extractor::extract_json,
    gemini::GeminiClient,
    generator::StoryGenerator,
    html_renderer::HtmlRenderer,
    picsum::PicsumReferenceBuilder,
    resolver::{illustration_seed, IllustrationResolver},
    validator::validate_story,
};
pub use models::{
    document::{sanitize_title, RenderedDocument, Section, StorybookContent},
    illustration::IllustrationRef,
    request::{StoryRequest, MAX_PROMPT_LEN},
    story::{StoryDocument, StoryPage, PAGE_COUNT},
};
pub use pipeline::{PipelineState, StorybookPipeline};
pub use traits::{
    DocumentRenderingService, IllustrationReferenceBuilder, TextGenerationService,
};
