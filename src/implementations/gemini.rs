use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::json;

use crate::config::StorybookConfig;
use crate::errors::TransportError;
use crate::traits::text_generation::TextGenerationService;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-pro";

/// Text-generation collaborator backed by the Google Generative
/// Language REST API.
///
/// The API key comes from the configuration object passed in at
/// construction (or its environment fallback); there is no ambient
/// global key state.
pub struct GeminiClient {
    config: StorybookConfig,
    http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: StorybookConfig) -> Result<Self, TransportError> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn request_url(&self, api_key: &str) -> String {
        let endpoint = self
            .config
            .llm_api
            .api_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT);
        let model = self
            .config
            .llm_api
            .model
            .as_deref()
            .unwrap_or(DEFAULT_MODEL);
        format!(
            "{}/{}:generateContent?key={}",
            endpoint.trim_end_matches('/'),
            model,
            api_key
        )
    }
}

#[async_trait]
impl TextGenerationService for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, TransportError> {
        let api_key = self
            .config
            .get_api_key()
            .map_err(|e| TransportError::MissingApiKey(e.to_string()))?;

        let request_body = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": self.config.temperature.unwrap_or(0.7),
                "maxOutputTokens": self.config.max_output_tokens.unwrap_or(4096),
            }
        });

        debug!("Sending request to Gemini API");

        let response = self
            .http_client
            .post(self.request_url(&api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("Network error when calling Gemini API: {}", e);
                warn!("{}", error_msg);
                if e.is_timeout() {
                    warn!("Request timed out");
                }
                if e.is_connect() {
                    warn!("Connection error - check network connectivity");
                }
                TransportError::Network(error_msg)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error message".to_string());

            warn!("API error: HTTP {} - {}", status, error_text);
            return Err(TransportError::Http {
                status,
                message: error_text,
            });
        }

        let response_text = response.text().await.map_err(|e| {
            warn!("Failed to get response text: {}", e);
            TransportError::Parse(e.to_string())
        })?;

        info!("Successfully received response from Gemini API");
        debug!("Response length: {} characters", response_text.len());

        let response_json: serde_json::Value = serde_json::from_str(&response_text).map_err(|e| {
            warn!("JSON parsing error: {}", e);
            TransportError::Parse(e.to_string())
        })?;

        // Extract text from the first candidate's first content part
        if let Some(text) = response_json["candidates"][0]["content"]["parts"][0]["text"].as_str() {
            debug!("Extracted candidate text ({} characters)", text.len());
            return Ok(text.to_string());
        }

        // Older response shapes put the text directly on the candidate
        if let Some(text) = response_json["candidates"][0]["output"].as_str() {
            debug!("Extracted candidate output ({} characters)", text.len());
            return Ok(text.to_string());
        }

        warn!("Failed to extract text from Gemini response");
        Err(TransportError::Parse(
            "Unable to find candidate text in Gemini response".to_string(),
        ))
    }
}
