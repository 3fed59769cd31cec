//! HTTP DTOs for the generation endpoints.
//!
//! Wire names are camelCase to match the client contract. Response DTOs
//! also derive `Deserialize` so the library client can reuse them.

use serde::{Deserialize, Serialize};

use crate::domain::StyleTag;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for POST /generate.
///
/// An absent `prompt` deserializes to the empty string so the handler can
/// answer it with the same 400 as a blank one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub style: StyleTag,
}

/// Request body for POST /generate-diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramRequest {
    #[serde(default)]
    pub prompt: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response body for POST /generate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub enhanced_prompt: String,
    /// Base64 data URI of the generated image.
    pub image: String,
}

/// Response body for POST /generate-diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramResponse {
    pub mermaid_code: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_defaults_style() {
        let json = r#"{"prompt":"a red fox in snow"}"#;
        let req: GenerateRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.prompt, "a red fox in snow");
        assert_eq!(req.style, StyleTag::Photorealistic);
    }

    #[test]
    fn absent_prompt_deserializes_to_empty_string() {
        let req: GenerateRequest = serde_json::from_str(r#"{"style":"anime"}"#).unwrap();
        assert_eq!(req.prompt, "");
        assert_eq!(req.style, StyleTag::Anime);

        let req: DiagramRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.prompt, "");
    }

    #[test]
    fn generate_request_accepts_explicit_style() {
        let json = r#"{"prompt":"a red fox in snow","style":"anime"}"#;
        let req: GenerateRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.style, StyleTag::Anime);
    }

    #[test]
    fn generate_response_uses_camel_case() {
        let resp = GenerateResponse {
            enhanced_prompt: "enhanced".to_string(),
            image: "data:image/png;base64,AAAA".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();

        assert!(json.contains("\"enhancedPrompt\""));
        assert!(json.contains("\"image\""));
    }

    #[test]
    fn diagram_response_uses_camel_case() {
        let resp = DiagramResponse {
            mermaid_code: "graph TD".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();

        assert!(json.contains("\"mermaidCode\""));
    }

    #[test]
    fn error_response_serialization() {
        let error = ErrorResponse::bad_request("Prompt is required");
        let json = serde_json::to_string(&error).unwrap();

        assert!(json.contains("BAD_REQUEST"));
        assert!(json.contains("Prompt is required"));
        assert!(!json.contains("details"));
    }
}
