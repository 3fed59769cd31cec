//! Clipdrop Provider - Implementation of ImageModel for the Clipdrop
//! text-to-image API.
//!
//! Clipdrop takes a multipart form with a single `prompt` field and returns
//! the raw PNG bytes directly, which suits the gateway's re-encode-to-data-URI
//! step.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ClipdropConfig::new(api_key)
//!     .with_base_url("https://clipdrop-api.co");
//!
//! let provider = ClipdropProvider::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{multipart, Client};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::ports::{GeneratedImage, ImageModel, ModelError};

/// Configuration for the Clipdrop provider.
#[derive(Debug, Clone)]
pub struct ClipdropConfig {
    /// API key for authentication.
    api_key: Option<Secret<String>>,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout. Image synthesis is slow; default is generous.
    pub timeout: Duration,
}

impl ClipdropConfig {
    /// Creates a new configuration with an optional API key.
    ///
    /// A missing key is allowed at construction so the gateway can boot
    /// without one; generation then fails with `MissingCredential`.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()).map(Secret::new),
            base_url: "https://clipdrop-api.co".to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key, if configured.
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret().as_str())
    }
}

/// Clipdrop API provider implementation.
pub struct ClipdropProvider {
    config: ClipdropConfig,
    client: Client,
}

impl ClipdropProvider {
    /// Creates a new Clipdrop provider with the given configuration.
    pub fn new(config: ClipdropConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the text-to-image endpoint URL.
    fn text_to_image_url(&self) -> String {
        format!("{}/text-to-image/v1", self.config.base_url)
    }

    fn map_send_error(&self, err: reqwest::Error) -> ModelError {
        if err.is_timeout() {
            ModelError::Timeout {
                timeout_secs: self.config.timeout.as_secs() as u32,
            }
        } else if err.is_connect() {
            ModelError::network(format!("Connection failed: {}", err))
        } else {
            ModelError::network(err.to_string())
        }
    }
}

#[async_trait]
impl ImageModel for ClipdropProvider {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ModelError> {
        let api_key = self
            .config
            .api_key()
            .ok_or(ModelError::MissingCredential)?
            .to_string();

        let form = multipart::Form::new().text("prompt", prompt.to_string());

        let response = self
            .client
            .post(self.text_to_image_url())
            .header("x-api-key", api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ModelError::upstream(status.as_u16(), error_body));
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ModelError::network(format!("Failed to read image body: {}", e)))?;

        if bytes.is_empty() {
            return Err(ModelError::parse("Empty image payload"));
        }

        Ok(GeneratedImage::new(bytes.to_vec(), mime_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = ClipdropConfig::new(Some("cd-key".to_string()))
            .with_base_url("https://custom.clipdrop.test")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.base_url, "https://custom.clipdrop.test");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), Some("cd-key"));
    }

    #[test]
    fn empty_key_counts_as_missing() {
        assert_eq!(ClipdropConfig::new(Some(String::new())).api_key(), None);
        assert_eq!(ClipdropConfig::new(None).api_key(), None);
    }

    #[tokio::test]
    async fn missing_credential_fails_before_network() {
        let provider = ClipdropProvider::new(ClipdropConfig::new(None));
        let result = provider.generate_image("a fox").await;
        assert!(matches!(result, Err(ModelError::MissingCredential)));
    }

    #[test]
    fn url_points_at_text_to_image_endpoint() {
        let provider = ClipdropProvider::new(ClipdropConfig::new(Some("k".to_string())));
        assert_eq!(
            provider.text_to_image_url(),
            "https://clipdrop-api.co/text-to-image/v1"
        );
    }
}
