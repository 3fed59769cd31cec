//! Diagram generation handler.
//!
//! Asks the text model for bare Mermaid source, strips code fences the
//! model may have added anyway, and falls back to a fixed two-node error
//! graph when the model call fails.

use std::sync::Arc;

use crate::domain::prompt::{diagram_instruction, strip_code_fences, FALLBACK_DIAGRAM};
use crate::ports::TextModel;

/// Handler for the diagram operation.
#[derive(Clone)]
pub struct GenerateDiagramHandler {
    text_model: Arc<dyn TextModel>,
}

impl GenerateDiagramHandler {
    /// Creates a new handler.
    pub fn new(text_model: Arc<dyn TextModel>) -> Self {
        Self { text_model }
    }

    /// Generates Mermaid source for a prompt. Never fails: a failed
    /// model call yields the fixed fallback graph.
    pub async fn handle(&self, prompt: &str) -> String {
        let instruction = diagram_instruction(prompt);

        match self.text_model.generate_text(&instruction).await {
            Ok(text) => strip_code_fences(&text),
            Err(err) => {
                tracing::warn!(error = %err, "text model failed, using fallback diagram");
                FALLBACK_DIAGRAM.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockTextModel;

    #[tokio::test]
    async fn strips_fences_from_model_output() {
        let model = Arc::new(
            MockTextModel::new().with_response("```mermaid\ngraph TD\n    A --> B\n```"),
        );
        let handler = GenerateDiagramHandler::new(model);

        let diagram = handler.handle("photosynthesis").await;
        assert_eq!(diagram, "graph TD\n    A --> B");
    }

    #[tokio::test]
    async fn passes_through_compliant_output() {
        let model = Arc::new(MockTextModel::new().with_response("graph TD\n    A --> B"));
        let handler = GenerateDiagramHandler::new(model);

        let diagram = handler.handle("photosynthesis").await;
        assert_eq!(diagram, "graph TD\n    A --> B");
    }

    #[tokio::test]
    async fn falls_back_to_fixed_error_graph() {
        let model = Arc::new(MockTextModel::new().with_upstream_error(500));
        let handler = GenerateDiagramHandler::new(model.clone());

        let diagram = handler.handle("anything").await;
        assert_eq!(diagram, "graph TD\n    A[Error] --> B[Diagram generation failed]");
        assert_eq!(model.call_count(), 1);
    }
}
