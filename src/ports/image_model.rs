//! Image Model Port - Interface for hosted image-generation providers.
//!
//! Unlike the text port, image failures have no safe fallback: a credential
//! or upstream error propagates to the caller and fails the whole request.

use async_trait::async_trait;

use super::ModelError;

/// Port for image-generation provider interactions.
#[async_trait]
pub trait ImageModel: Send + Sync {
    /// Submit a prompt and return the generated image as binary data.
    ///
    /// Fails with [`ModelError::MissingCredential`] without touching the
    /// network when no API credential is configured.
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ModelError>;
}

/// Binary image payload returned by a provider.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// Raw image bytes.
    pub bytes: Vec<u8>,
    /// MIME type of the payload (e.g. "image/png").
    pub mime_type: String,
}

impl GeneratedImage {
    /// Creates a new payload.
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// PNG payload shorthand.
    pub fn png(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "image/png")
    }
}
