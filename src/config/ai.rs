//! AI model configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upstream model configuration.
///
/// API keys are optional at startup. A missing text key only degrades
/// enhancement and diagram output; a missing image key makes the image
/// endpoint reject requests until one is supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key (text model)
    pub gemini_api_key: Option<String>,

    /// Gemini model identifier
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Clipdrop API key (image model)
    pub clipdrop_api_key: Option<String>,

    /// Text model request timeout in seconds
    #[serde(default = "default_text_timeout")]
    pub text_timeout_secs: u64,

    /// Image model request timeout in seconds
    #[serde(default = "default_image_timeout")]
    pub image_timeout_secs: u64,
}

impl AiConfig {
    /// Get text model timeout as Duration
    pub fn text_timeout(&self) -> Duration {
        Duration::from_secs(self.text_timeout_secs)
    }

    /// Get image model timeout as Duration
    pub fn image_timeout(&self) -> Duration {
        Duration::from_secs(self.image_timeout_secs)
    }

    /// Check if the text model is configured
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Check if the image model is configured
    pub fn has_clipdrop(&self) -> bool {
        self.clipdrop_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text_timeout_secs == 0 || self.image_timeout_secs == 0 {
            return Err(ValidationError::InvalidModelTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: default_gemini_model(),
            clipdrop_api_key: None,
            text_timeout_secs: default_text_timeout(),
            image_timeout_secs: default_image_timeout(),
        }
    }
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_text_timeout() -> u64 {
    60
}

fn default_image_timeout() -> u64 {
    120
}
