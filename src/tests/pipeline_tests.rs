#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::errors::{
        GenerationError, RenderError, StorybookError, TransportError, ValidationError,
    };
    use crate::implementations::composer::{build_content, DocumentComposer};
    use crate::implementations::generator::StoryGenerator;
    use crate::implementations::html_renderer::HtmlRenderer;
    use crate::implementations::picsum::PicsumReferenceBuilder;
    use crate::implementations::resolver::{illustration_seed, IllustrationResolver};
    use crate::models::document::{sanitize_title, StorybookContent};
    use crate::models::request::StoryRequest;
    use crate::models::story::{StoryDocument, StoryPage};
    use crate::pipeline::StorybookPipeline;
    use crate::traits::document_rendering::DocumentRenderingService;
    use crate::traits::text_generation::TextGenerationService;

    fn setup() {
        let _ = env_logger::try_init();
    }

    /// Text service that always returns a canned response
    struct StubTextService {
        response: String,
    }

    #[async_trait]
    impl TextGenerationService for StubTextService {
        async fn complete(&self, _prompt: &str) -> Result<String, TransportError> {
            Ok(self.response.clone())
        }
    }

    /// Text service that always fails at the transport level
    struct FailingTextService;

    #[async_trait]
    impl TextGenerationService for FailingTextService {
        async fn complete(&self, _prompt: &str) -> Result<String, TransportError> {
            Err(TransportError::Network("connection refused".to_string()))
        }
    }

    /// Renderer that always fails, for error-wrapping checks
    struct FailingRenderer;

    #[async_trait]
    impl DocumentRenderingService for FailingRenderer {
        fn media_type(&self) -> &str {
            "application/octet-stream"
        }

        async fn render(&self, _content: &StorybookContent) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::Collaborator("layout engine crashed".to_string()))
        }
    }

    fn sample_story() -> StoryDocument {
        StoryDocument {
            title: "Pip and the Magical Garden".to_string(),
            characters: Some("Pip, a small brown mouse with a red scarf".to_string()),
            pages: (1..=5)
                .map(|n| StoryPage {
                    page_number: n,
                    text: format!("Pip explores, page {}.", n),
                    image_prompt: format!("Pip the brown mouse in the garden, scene {}", n),
                })
                .collect(),
        }
    }

    fn five_page_response() -> String {
        let pages: Vec<String> = (1..=5)
            .map(|n| {
                format!(
                    r#"{{"pageNumber": {n}, "text": "Page {n} of Pip's adventure.", "imagePrompt": "Pip the brown mouse with a red scarf, scene {n}"}}"#
                )
            })
            .collect();
        format!(
            "Here is your storybook!\n{{\"title\": \"Pip and the Magical Garden\", \"characters\": \"Pip, a small brown mouse\", \"pages\": [{}]}}\nHope you enjoy it.",
            pages.join(", ")
        )
    }

    fn three_page_response() -> String {
        let pages: Vec<String> = (1..=3)
            .map(|n| {
                format!(
                    r#"{{"pageNumber": {n}, "text": "Page {n}.", "imagePrompt": "Scene {n}"}}"#
                )
            })
            .collect();
        format!(
            "{{\"title\": \"A Short Story\", \"pages\": [{}]}}",
            pages.join(", ")
        )
    }

    fn build_pipeline<T: TextGenerationService>(
        text_service: T,
    ) -> StorybookPipeline<T, PicsumReferenceBuilder, HtmlRenderer> {
        StorybookPipeline::new(
            StoryGenerator::new(text_service),
            IllustrationResolver::new(PicsumReferenceBuilder, 400, 300),
            DocumentComposer::new(HtmlRenderer::new()),
        )
    }

    #[test]
    fn seed_is_deterministic_and_bounded() {
        setup();
        let samples = [
            "Pip the brown mouse with a red scarf",
            "a dragon over snowy mountains",
            "x",
            "Ünïcödé 🎨 prompt",
        ];
        for text in samples {
            let first = illustration_seed(text);
            let second = illustration_seed(text);
            assert_eq!(first, second, "seed must be stable for {:?}", text);
            assert!(first < 1000, "seed {} out of range for {:?}", first, text);
        }
    }

    #[test]
    fn resolve_is_idempotent_and_page_ordered() {
        setup();
        let story = sample_story();
        let resolver = IllustrationResolver::new(PicsumReferenceBuilder, 400, 300);

        let first = resolver.resolve(&story);
        let second = resolver.resolve(&story);

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
        for (i, reference) in first.iter().enumerate() {
            assert_eq!(reference.page_number as usize, i + 1);
            assert!(reference.url.starts_with("https://picsum.photos/seed/"));
            assert!(reference.url.ends_with("/400/300"));
        }
    }

    #[test]
    fn content_has_one_section_per_page_in_order() {
        setup();
        let story = sample_story();
        let resolver = IllustrationResolver::new(PicsumReferenceBuilder, 400, 300);
        let illustrations = resolver.resolve(&story);

        let content = build_content(&story, &illustrations);

        assert_eq!(content.title, story.title);
        assert_eq!(content.sections.len(), 5);
        for (i, section) in content.sections.iter().enumerate() {
            assert_eq!(section.page_number as usize, i + 1);
            assert_eq!(section.text, story.pages[i].text);
            assert_eq!(section.illustration, illustrations[i]);
        }
    }

    #[tokio::test]
    async fn compose_renders_title_and_five_pages() {
        setup();
        let story = sample_story();
        let resolver = IllustrationResolver::new(PicsumReferenceBuilder, 400, 300);
        let illustrations = resolver.resolve(&story);
        let composer = DocumentComposer::new(HtmlRenderer::new());

        let document = composer.compose(&story, &illustrations).await.unwrap();

        assert_eq!(document.media_type, "text/html");
        assert_eq!(document.title_slug, "Pip_and_the_Magical_Garden");
        let html = String::from_utf8(document.bytes).unwrap();
        assert!(html.contains("Pip and the Magical Garden"));
        assert_eq!(html.matches("class=\"page\"").count(), 5);
        assert_eq!(html.matches("class=\"page title-page\"").count(), 1);
        assert_eq!(html.matches("class=\"story-image\"").count(), 5);
    }

    #[tokio::test]
    async fn compose_wraps_renderer_failure() {
        setup();
        let story = sample_story();
        let resolver = IllustrationResolver::new(PicsumReferenceBuilder, 400, 300);
        let illustrations = resolver.resolve(&story);
        let composer = DocumentComposer::new(FailingRenderer);

        let err = composer.compose(&story, &illustrations).await.unwrap_err();
        let RenderError::Collaborator(message) = err;
        assert!(message.contains("layout engine crashed"));
    }

    #[tokio::test]
    async fn create_storybook_succeeds_with_well_formed_response() {
        setup();
        let pipeline = build_pipeline(StubTextService {
            response: five_page_response(),
        });
        let request =
            StoryRequest::new("A brave little mouse named Pip who discovers a magical garden")
                .unwrap();

        let document = pipeline.create_storybook(&request).await.unwrap();
        assert!(!document.is_empty());

        // Identical input must yield identical illustration references in
        // a second full run
        let again = pipeline.create_storybook(&request).await.unwrap();
        assert_eq!(document.bytes, again.bytes);
    }

    #[tokio::test]
    async fn create_storybook_rejects_three_page_story() {
        setup();
        let pipeline = build_pipeline(StubTextService {
            response: three_page_response(),
        });
        let request = StoryRequest::new("A very short tale").unwrap();

        let err = pipeline.create_storybook(&request).await.unwrap_err();
        match err {
            StorybookError::Generation(GenerationError::Validation(
                ValidationError::WrongPageCount(3),
            )) => {}
            other => panic!("Expected WrongPageCount(3), got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_storybook_surfaces_transport_failure() {
        setup();
        let pipeline = build_pipeline(FailingTextService);
        let request = StoryRequest::new("A story that never starts").unwrap();

        let err = pipeline.create_storybook(&request).await.unwrap_err();
        match err {
            StorybookError::Generation(GenerationError::Transport(TransportError::Network(_))) => {}
            other => panic!("Expected transport failure, got {:?}", other),
        }
    }

    #[test]
    fn request_rejects_empty_and_oversized_prompts() {
        setup();
        assert!(matches!(
            StoryRequest::new("   "),
            Err(StorybookError::InvalidInput(_))
        ));
        assert!(matches!(
            StoryRequest::new("a".repeat(501)),
            Err(StorybookError::InvalidInput(_))
        ));
        assert!(StoryRequest::new("a".repeat(500)).is_ok());
    }

    #[test]
    fn titles_sanitize_to_safe_filenames() {
        setup();
        assert_eq!(sanitize_title("Pip & the Garden!"), "Pip_the_Garden");
        assert_eq!(sanitize_title("!!!"), "storybook");
    }

    fn should_skip_api_tests() -> bool {
        setup();
        dotenv::dotenv().ok();
        let any_key = ["GEMINI_API_KEY", "GOOGLE_API_KEY"]
            .iter()
            .any(|key| std::env::var(key).is_ok());
        if !any_key {
            log::warn!("No API key found. Skipping tests that require API access.");
        }
        !any_key
    }

    #[tokio::test]
    #[ignore = "Requires API key"]
    async fn live_pipeline_produces_document() {
        if should_skip_api_tests() {
            return;
        }

        let config = crate::config::StorybookConfig::default();
        let client = crate::implementations::gemini::GeminiClient::new(config.clone()).unwrap();
        let pipeline = StorybookPipeline::new(
            StoryGenerator::new(client),
            IllustrationResolver::new(
                PicsumReferenceBuilder,
                config.illustration.width,
                config.illustration.height,
            ),
            DocumentComposer::new(HtmlRenderer::new()),
        );

        let request =
            StoryRequest::new("A brave little mouse named Pip who discovers a magical garden")
                .unwrap();
        let document = pipeline.create_storybook(&request).await.unwrap();
        assert!(!document.is_empty());
        assert_eq!(document.media_type, "text/html");
    }
}
