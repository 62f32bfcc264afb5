use log::debug;
use serde_json::Value;

use crate::errors::ValidationError;
use crate::models::story::{StoryDocument, StoryPage, PAGE_COUNT};

/// Check a parsed candidate object against the storybook schema and
/// build the validated [`StoryDocument`].
///
/// The model is untrusted free text, so every structural requirement is
/// checked here, in order, short-circuiting on the first failure. All
/// downstream components assume a `StoryDocument` is well-formed and do
/// not re-check.
pub fn validate_story(candidate: &Value) -> Result<StoryDocument, ValidationError> {
    let title = match candidate.get("title").and_then(Value::as_str) {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => return Err(ValidationError::MissingField("title".to_string())),
    };

    let pages_value = match candidate.get("pages").and_then(Value::as_array) {
        Some(pages) => pages,
        None => return Err(ValidationError::MissingField("pages".to_string())),
    };

    if pages_value.len() != PAGE_COUNT {
        return Err(ValidationError::WrongPageCount(pages_value.len()));
    }

    let mut pages = Vec::with_capacity(PAGE_COUNT);
    for (index, page) in pages_value.iter().enumerate() {
        // The page number must match the page's 1-based position; a
        // duplicated or shuffled numbering is rejected rather than
        // silently renumbered.
        let expected = (index + 1) as u64;
        let page_number = match page.get("pageNumber").and_then(Value::as_u64) {
            Some(n) if n == expected => n as u32,
            _ => {
                return Err(ValidationError::InvalidPage {
                    index,
                    field: "pageNumber".to_string(),
                })
            }
        };

        let text = require_page_text(page, index, "text")?;
        let image_prompt = require_page_text(page, index, "imagePrompt")?;

        pages.push(StoryPage {
            page_number,
            text,
            image_prompt,
        });
    }

    // Optional field; an empty summary is treated as absent
    let characters = candidate
        .get("characters")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    debug!("Validated story '{}' with {} pages", title, pages.len());

    Ok(StoryDocument {
        title,
        characters,
        pages,
    })
}

fn require_page_text(page: &Value, index: usize, field: &str) -> Result<String, ValidationError> {
    match page.get(field).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(ValidationError::InvalidPage {
            index,
            field: field.to_string(),
        }),
    }
}
