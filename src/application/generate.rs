//! Visual generation pipeline: enhance, then render an image.
//!
//! Runs the two upstream calls sequentially because the image call consumes
//! the enhanced prompt. Enhancement cannot fail (it falls back); image
//! failures propagate and fail the whole operation.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::domain::{GeneratedVisual, StyleTag};
use crate::ports::{ImageModel, ModelError, TextModel};

use super::EnhancePromptHandler;

/// Handler for the full generate-visual operation.
#[derive(Clone)]
pub struct GenerateVisualHandler {
    enhance: EnhancePromptHandler,
    image_model: Arc<dyn ImageModel>,
}

impl GenerateVisualHandler {
    /// Creates a new handler.
    pub fn new(text_model: Arc<dyn TextModel>, image_model: Arc<dyn ImageModel>) -> Self {
        Self {
            enhance: EnhancePromptHandler::new(text_model),
            image_model,
        }
    }

    /// Enhances the prompt and renders an image from the enhanced text.
    ///
    /// The returned image is re-encoded as a base64 data URI.
    pub async fn handle(
        &self,
        prompt: &str,
        style: StyleTag,
    ) -> Result<GeneratedVisual, ModelError> {
        let enhanced_prompt = self.enhance.handle(prompt, style).await;

        let image = self.image_model.generate_image(&enhanced_prompt).await?;
        let data_uri = format!(
            "data:{};base64,{}",
            image.mime_type,
            STANDARD.encode(&image.bytes)
        );

        Ok(GeneratedVisual {
            enhanced_prompt,
            image: data_uri,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockImageModel, MockTextModel};

    #[tokio::test]
    async fn encodes_image_bytes_as_data_uri() {
        let text = Arc::new(MockTextModel::new().with_response("enhanced"));
        let image = Arc::new(MockImageModel::new().with_png(vec![1, 2, 3]));
        let handler = GenerateVisualHandler::new(text, image.clone());

        let visual = handler.handle("a fox", StyleTag::Sketch).await.unwrap();
        assert_eq!(visual.enhanced_prompt, "enhanced");
        assert_eq!(visual.image, format!("data:image/png;base64,{}", STANDARD.encode([1u8, 2, 3])));
        assert_eq!(image.call_count(), 1);
    }

    #[tokio::test]
    async fn image_model_receives_enhanced_prompt() {
        let text = Arc::new(MockTextModel::new().with_response("a very detailed fox"));
        let image = Arc::new(MockImageModel::new().with_png(vec![0]));
        let handler = GenerateVisualHandler::new(text, image.clone());

        handler.handle("a fox", StyleTag::Anime).await.unwrap();
        assert_eq!(image.calls(), vec!["a very detailed fox".to_string()]);
    }

    #[tokio::test]
    async fn enhancement_failure_still_reaches_image_model_with_fallback() {
        let text = Arc::new(MockTextModel::new().with_upstream_error(503));
        let image = Arc::new(MockImageModel::new().with_png(vec![0]));
        let handler = GenerateVisualHandler::new(text, image.clone());

        let visual = handler.handle("a fox", StyleTag::Anime).await.unwrap();
        assert_eq!(
            visual.enhanced_prompt,
            "a fox, anime, high resolution, ultra detailed, cinematic lighting"
        );
        assert_eq!(image.calls(), vec![visual.enhanced_prompt.clone()]);
    }

    #[tokio::test]
    async fn image_failure_propagates() {
        let text = Arc::new(MockTextModel::new().with_response("enhanced"));
        let image = Arc::new(MockImageModel::new().with_upstream_error(500));
        let handler = GenerateVisualHandler::new(text, image);

        let result = handler.handle("a fox", StyleTag::Anime).await;
        assert!(matches!(result, Err(ModelError::Upstream { status: 500, .. })));
    }

    #[tokio::test]
    async fn missing_credential_propagates_without_network_call() {
        let text = Arc::new(MockTextModel::new().with_response("enhanced"));
        let image = Arc::new(MockImageModel::new().with_missing_credential());
        let handler = GenerateVisualHandler::new(text, image.clone());

        let result = handler.handle("a fox", StyleTag::Anime).await;
        assert!(matches!(result, Err(ModelError::MissingCredential)));
        // The mock counts attempts; the credential check rejects before any work.
        assert_eq!(image.call_count(), 1);
    }
}
