//! HTTP handlers for the generation endpoints.
//!
//! These handlers connect axum routes to the application layer. Prompt
//! presence is validated here, before any upstream call is made.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{GenerateDiagramHandler, GenerateVisualHandler};
use crate::ports::{ImageModel, ModelError, TextModel};

use super::dto::{
    DiagramRequest, DiagramResponse, ErrorResponse, GenerateRequest, GenerateResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared gateway state containing the model ports.
#[derive(Clone)]
pub struct GatewayAppState {
    pub text_model: Arc<dyn TextModel>,
    pub image_model: Arc<dyn ImageModel>,
}

impl GatewayAppState {
    pub fn new(text_model: Arc<dyn TextModel>, image_model: Arc<dyn ImageModel>) -> Self {
        Self {
            text_model,
            image_model,
        }
    }

    pub fn generate_visual_handler(&self) -> GenerateVisualHandler {
        GenerateVisualHandler::new(self.text_model.clone(), self.image_model.clone())
    }

    pub fn generate_diagram_handler(&self) -> GenerateDiagramHandler {
        GenerateDiagramHandler::new(self.text_model.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Generate an enhanced prompt and an image.
///
/// POST /generate
pub async fn generate_visual(
    State(app_state): State<GatewayAppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    if req.prompt.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Prompt is required")),
        ));
    }

    let handler = app_state.generate_visual_handler();
    let visual = handler
        .handle(req.prompt.trim(), req.style)
        .await
        .map_err(model_error_response)?;

    let response = GenerateResponse {
        enhanced_prompt: visual.enhanced_prompt,
        image: visual.image,
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Generate a Mermaid diagram for a prompt.
///
/// POST /generate-diagram
pub async fn generate_diagram(
    State(app_state): State<GatewayAppState>,
    Json(req): Json<DiagramRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    if req.prompt.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Prompt is required")),
        ));
    }

    let handler = app_state.generate_diagram_handler();
    let mermaid_code = handler.handle(req.prompt.trim()).await;

    Ok((StatusCode::OK, Json(DiagramResponse { mermaid_code })))
}

/// Liveness probe.
///
/// GET /
pub async fn liveness() -> impl IntoResponse {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"), " - ok")
}

/// Maps image-path model errors onto a 500 with best-effort detail.
fn model_error_response(err: ModelError) -> (StatusCode, Json<ErrorResponse>) {
    let response = match &err {
        ModelError::MissingCredential => {
            ErrorResponse::internal("Image model credential not configured")
        }
        other => ErrorResponse::internal(format!("Image generation failed: {}", other)),
    };

    tracing::error!(error = %err, "image generation request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(response))
}
