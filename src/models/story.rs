use serde::{Deserialize, Serialize};

/// Every storybook has exactly this many pages
pub const PAGE_COUNT: usize = 5;

/// A single page of a validated story.
///
/// Pages only exist inside a [`StoryDocument`]; `page_number` always
/// equals the page's 1-based position in the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoryPage {
    #[serde(rename = "pageNumber")]
    pub page_number: u32,

    /// Short, age-appropriate narrative text for the page
    pub text: String,

    /// Visual description used to derive the page's illustration
    #[serde(rename = "imagePrompt")]
    pub image_prompt: String,
}

/// The validated, schema-conformant in-memory representation of a
/// 5-page story produced by the generation step.
///
/// Constructed only by the schema validator; consumed read-only by the
/// illustration resolver and the document composer, which do not
/// re-check its invariants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoryDocument {
    pub title: String,

    /// Description of the main characters, kept for visual consistency
    /// notes on the title page
    pub characters: Option<String>,

    pub pages: Vec<StoryPage>,
}
