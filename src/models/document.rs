use crate::models::illustration::IllustrationRef;

/// One content section of the composed document: a page's narrative
/// text paired with its illustration reference.
#[derive(Debug, Clone)]
pub struct Section {
    pub page_number: u32,
    pub text: String,
    pub illustration: IllustrationRef,
}

/// Structured content handed to the rendering collaborator: a title
/// section followed by exactly one section per story page, in page
/// order.
#[derive(Debug, Clone)]
pub struct StorybookContent {
    pub title: String,
    pub characters: Option<String>,
    pub sections: Vec<Section>,
}

/// The finished binary document artifact.
///
/// Owned by the caller once returned; the core retains nothing.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub media_type: String,
    /// Sanitized story title, suitable as a filename stem
    pub title_slug: String,
}

impl RenderedDocument {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Reduce a story title to a filesystem-safe stem
pub fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    let slug = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    if slug.is_empty() {
        "storybook".to_string()
    } else {
        slug
    }
}
