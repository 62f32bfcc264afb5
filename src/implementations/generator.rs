use log::{debug, info, warn};

use crate::errors::GenerationError;
use crate::implementations::extractor::extract_json;
use crate::implementations::validator::validate_story;
use crate::models::request::StoryRequest;
use crate::models::story::StoryDocument;
use crate::traits::text_generation::TextGenerationService;

/// Fixed instruction template for story generation.
///
/// Requests exactly 5 pages, a consistent character description reused
/// across all per-page image prompts, short age-appropriate text, and
/// the exact target schema inline. `{prompt}` is the only substitution
/// point; the template is a fixed asset, not configurable at runtime.
const STORY_PROMPT_TEMPLATE: &str = r#"Create a 5-page children's storybook based on this prompt: "{prompt}".

IMPORTANT GUIDELINES:
1. Maintain consistent main characters throughout all 5 pages
2. Create a clear story arc with beginning, middle, and end
3. Use age-appropriate language for children aged 3-8
4. Each page should have 2-4 sentences maximum
5. Include descriptive image prompts that maintain character appearance consistency
6. Make the story educational and positive with a good moral lesson

Return the response in this exact JSON format:
{
  "title": "Story Title (should be catchy and child-friendly)",
  "characters": "Brief description of main characters for consistency",
  "pages": [
    {
      "pageNumber": 1,
      "text": "Page 1 text content (introduction of characters and setting)",
      "imagePrompt": "Detailed visual description including character appearance, setting, and scene. Be specific about character features, colors, and style for consistency."
    },
    {
      "pageNumber": 2,
      "text": "Page 2 text content (conflict or adventure begins)",
      "imagePrompt": "Detailed visual description maintaining same character appearance from page 1."
    },
    {
      "pageNumber": 3,
      "text": "Page 3 text content (middle of story, building tension)",
      "imagePrompt": "Detailed visual description with consistent characters."
    },
    {
      "pageNumber": 4,
      "text": "Page 4 text content (climax or problem resolution)",
      "imagePrompt": "Detailed visual description showing the climax scene with same consistent character designs."
    },
    {
      "pageNumber": 5,
      "text": "Page 5 text content (happy ending and moral lesson)",
      "imagePrompt": "Detailed visual description of the resolution with consistent characters, showing a happy ending scene."
    }
  ]
}

Example character consistency: if you create a character like "a small brown rabbit with blue overalls and floppy ears", mention these specific details in ALL image prompts to maintain visual consistency.

Make sure the story flows naturally from page to page, has educational value, and ends with a positive message."#;

/// Turns a validated prompt into a validated [`StoryDocument`].
///
/// One synchronous call to the text-generation collaborator per
/// invocation; retry-on-failure is a caller policy, never applied here.
pub struct StoryGenerator<T: TextGenerationService> {
    text_service: T,
}

impl<T: TextGenerationService> StoryGenerator<T> {
    pub fn new(text_service: T) -> Self {
        Self { text_service }
    }

    /// Generate and validate a 5-page story for the given request
    pub async fn generate(&self, request: &StoryRequest) -> Result<StoryDocument, GenerationError> {
        let prompt = build_prompt(request.prompt());
        debug!("Built story prompt ({} chars)", prompt.len());

        let raw = self.text_service.complete(&prompt).await.map_err(|e| {
            // The prompt text is deliberately absent from the error path
            warn!("Text generation call failed: {}", e);
            GenerationError::Transport(e)
        })?;

        debug!("Received raw model response ({} chars)", raw.len());

        let candidate = extract_json(&raw)?;
        let story = validate_story(&candidate)?;

        info!("Generated story: '{}'", story.title);
        Ok(story)
    }
}

fn build_prompt(prompt_text: &str) -> String {
    STORY_PROMPT_TEMPLATE.replace("{prompt}", prompt_text)
}

#[cfg(test)]
mod tests {
    use super::build_prompt;

    #[test]
    fn prompt_embeds_request_text_verbatim() {
        let prompt = build_prompt("A brave little mouse named Pip");
        assert!(prompt.contains("\"A brave little mouse named Pip\""));
        assert!(prompt.contains("5-page children's storybook"));
        assert!(prompt.contains("\"pageNumber\": 5"));
    }
}
