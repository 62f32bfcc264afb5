pub mod document_rendering;
pub mod illustration_builder;
pub mod text_generation;

// Re-export traits
pub use document_rendering::DocumentRenderingService;
pub use illustration_builder::IllustrationReferenceBuilder;
pub use text_generation::TextGenerationService;
