use async_trait::async_trait;
use log::debug;

use crate::errors::RenderError;
use crate::models::document::StorybookContent;
use crate::traits::document_rendering::DocumentRenderingService;

/// Rendering collaborator producing a self-contained, print-paginated
/// HTML document: a styled title page followed by one page section per
/// story page, each with its narrative text, illustration, and page
/// number. `page-break-after` gives one story page per printed page.
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentRenderingService for HtmlRenderer {
    fn media_type(&self) -> &str {
        "text/html"
    }

    async fn render(&self, content: &StorybookContent) -> Result<Vec<u8>, RenderError> {
        let mut html = String::with_capacity(4096);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape(&content.title)));
        html.push_str(STYLE_SHEET);
        html.push_str("</head>\n<body>\n");

        html.push_str("<div class=\"page title-page\">\n");
        html.push_str(&format!(
            "  <div class=\"title\">{}</div>\n",
            escape(&content.title)
        ));
        html.push_str("  <div class=\"subtitle\">A Magical Story Created with AI</div>\n");
        if let Some(characters) = &content.characters {
            html.push_str(&format!(
                "  <div class=\"characters-info\"><strong>Characters:</strong> {}</div>\n",
                escape(characters)
            ));
        }
        html.push_str("</div>\n");

        for section in &content.sections {
            html.push_str("<div class=\"page\">\n");
            html.push_str(&format!(
                "  <div class=\"story-text\">{}</div>\n",
                escape(&section.text)
            ));
            html.push_str(&format!(
                "  <img src=\"{}\" alt=\"Page {}\" class=\"story-image\">\n",
                escape(&section.illustration.url),
                section.page_number
            ));
            html.push_str(&format!(
                "  <div class=\"page-number\">{}</div>\n",
                section.page_number
            ));
            html.push_str("</div>\n");
        }

        html.push_str("</body>\n</html>\n");

        debug!("Rendered HTML document ({} bytes)", html.len());
        Ok(html.into_bytes())
    }
}

/// Minimal HTML escaping for text interpolated into the document
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const STYLE_SHEET: &str = r#"<style>
  body {
    font-family: 'Comic Sans MS', 'Arial', sans-serif;
    margin: 0;
    padding: 0;
  }
  .page {
    background: white;
    padding: 30px;
    min-height: calc(100vh - 60px);
    page-break-after: always;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    position: relative;
  }
  .page:last-child { page-break-after: avoid; }
  .title-page {
    background: linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%);
    text-align: center;
  }
  .title {
    font-size: 36px;
    color: #333;
    margin-bottom: 20px;
    font-weight: bold;
  }
  .subtitle {
    font-size: 18px;
    color: #666;
    font-style: italic;
    margin-bottom: 40px;
  }
  .characters-info {
    background: #f8f9fa;
    padding: 15px;
    border-radius: 10px;
    margin: 20px 0;
    font-size: 14px;
    color: #666;
    border-left: 4px solid #667eea;
  }
  .story-text {
    font-size: 18px;
    line-height: 1.8;
    color: #333;
    margin: 20px 0;
    text-align: center;
    max-width: 500px;
  }
  .story-image {
    width: 100%;
    max-width: 450px;
    height: 350px;
    object-fit: cover;
    border-radius: 15px;
    margin: 20px 0;
  }
  .page-number {
    position: absolute;
    bottom: 20px;
    right: 30px;
    font-size: 14px;
    color: #999;
    font-weight: bold;
  }
</style>
"#;
