//! Prompt enhancement handler.
//!
//! Submits the enhancement instruction to the text model. The model port
//! fails with a `ModelError`; this handler is the caller that substitutes
//! the documented deterministic fallback, so enhancement itself never
//! fails. The substitution is logged, not surfaced.

use std::sync::Arc;

use crate::domain::prompt::{enhancement_instruction, fallback_enhancement};
use crate::domain::StyleTag;
use crate::ports::TextModel;

/// Handler for the enhancement operation.
#[derive(Clone)]
pub struct EnhancePromptHandler {
    text_model: Arc<dyn TextModel>,
}

impl EnhancePromptHandler {
    /// Creates a new handler.
    pub fn new(text_model: Arc<dyn TextModel>) -> Self {
        Self { text_model }
    }

    /// Enhances a prompt for image generation. Never fails: a failed
    /// model call yields the deterministic fallback.
    ///
    /// No retry; one attempt per request.
    pub async fn handle(&self, prompt: &str, style: StyleTag) -> String {
        let instruction = enhancement_instruction(prompt, style);

        match self.text_model.generate_text(&instruction).await {
            Ok(text) => text.trim().to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "text model failed, using fallback enhancement");
                fallback_enhancement(prompt, style)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockTextModel;

    #[tokio::test]
    async fn returns_trimmed_model_output_on_success() {
        let model = Arc::new(MockTextModel::new().with_response("  an enhanced prompt \n"));
        let handler = EnhancePromptHandler::new(model.clone());

        let enhanced = handler.handle("a fox", StyleTag::Anime).await;
        assert_eq!(enhanced, "an enhanced prompt");
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn instruction_carries_prompt_and_style() {
        let model = Arc::new(MockTextModel::new().with_response("ok"));
        let handler = EnhancePromptHandler::new(model.clone());

        handler.handle("a red fox in snow", StyleTag::Watercolor).await;

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].contains("a red fox in snow"));
        assert!(calls[0].contains("watercolor"));
    }

    #[tokio::test]
    async fn substitutes_documented_fallback_on_failure() {
        let model = Arc::new(MockTextModel::new().with_upstream_error(503));
        let handler = EnhancePromptHandler::new(model);

        let enhanced = handler.handle("a red fox in snow", StyleTag::Anime).await;
        assert_eq!(
            enhanced,
            "a red fox in snow, anime, high resolution, ultra detailed, cinematic lighting"
        );
    }

    #[tokio::test]
    async fn does_not_retry_after_failure() {
        let model = Arc::new(MockTextModel::new().with_upstream_error(503));
        let handler = EnhancePromptHandler::new(model.clone());

        handler.handle("a fox", StyleTag::Photorealistic).await;
        assert_eq!(model.call_count(), 1);
    }
}
