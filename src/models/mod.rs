pub mod document;
pub mod illustration;
pub mod request;
pub mod story;

// Re-export common model types
pub use document::{RenderedDocument, Section, StorybookContent};
pub use illustration::IllustrationRef;
pub use request::StoryRequest;
pub use story::{StoryDocument, StoryPage, PAGE_COUNT};
