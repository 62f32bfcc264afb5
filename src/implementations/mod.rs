pub mod composer;
pub mod extractor;
pub mod gemini;
pub mod generator;
pub mod html_renderer;
pub mod picsum;
pub mod resolver;
pub mod validator;

pub use composer::DocumentComposer;
pub use extractor::extract_json;
pub use gemini::GeminiClient;
pub use generator::StoryGenerator;
pub use html_renderer::HtmlRenderer;
pub use picsum::PicsumReferenceBuilder;
pub use resolver::IllustrationResolver;
pub use validator::validate_story;
