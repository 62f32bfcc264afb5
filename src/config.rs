use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Missing required API key: {0}")]
    MissingApiKey(String),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    /// API key for the text-generation service
    pub api_key: Option<String>,

    /// API endpoint for the text-generation service
    pub api_endpoint: Option<String>,

    /// Model to use
    pub model: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IllustrationConfig {
    /// Width in pixels of the derived placeholder illustrations
    pub width: u32,

    /// Height in pixels of the derived placeholder illustrations
    pub height: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorybookConfig {
    /// Configuration for the LLM used for story generation
    pub llm_api: ApiConfig,

    /// Dimensions of derived illustrations
    pub illustration: IllustrationConfig,

    /// Maximum output tokens for API calls
    pub max_output_tokens: Option<usize>,

    /// Temperature for generation (0.0-1.0)
    pub temperature: Option<f32>,
}

impl StorybookConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: StorybookConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Get the API key, checking environment variables if not in config
    pub fn get_api_key(&self) -> Result<String, ConfigError> {
        use log::{debug, info};

        // First check if we have the API key in the config
        if let Some(api_key) = &self.llm_api.api_key {
            debug!("Using API key from config");
            return Ok(api_key.clone());
        }

        // Fall back to environment variables
        let env_vars = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];
        for env_var in env_vars {
            match std::env::var(env_var) {
                Ok(key) => {
                    info!("Using API key from environment variable {}", env_var);
                    return Ok(key);
                }
                Err(_) => {
                    debug!("Environment variable {} not set", env_var);
                }
            }
        }

        Err(ConfigError::MissingApiKey(
            "No API key in config and neither GEMINI_API_KEY nor GOOGLE_API_KEY is set".to_string(),
        ))
    }
}

/// Default configuration
impl Default for StorybookConfig {
    fn default() -> Self {
        StorybookConfig {
            llm_api: ApiConfig {
                api_key: None,
                api_endpoint: Some(
                    "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
                ),
                model: Some("gemini-pro".to_string()),
            },
            illustration: IllustrationConfig {
                width: 400,
                height: 300,
            },
            max_output_tokens: Some(4096),
            temperature: Some(0.7),
        }
    }
}
