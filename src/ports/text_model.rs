//! Text Model Port - Interface for hosted text-generation providers.
//!
//! The gateway submits fully templated instructions and expects plain text
//! back. Callers decide what to do with a failure: the enhancement and
//! diagram handlers substitute documented fallback values, so a provider
//! error never surfaces from those paths.

use async_trait::async_trait;

/// Port for text-generation provider interactions.
///
/// Implementations connect to an external service (Gemini, OpenAI, etc.)
/// and return the raw text of the first candidate response.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Submit an instruction and return the model's text response.
    ///
    /// The instruction is a complete prompt; implementations add no
    /// system prompt or conversation framing of their own.
    async fn generate_text(&self, instruction: &str) -> Result<String, ModelError>;
}

/// Errors from hosted model calls, shared by the text and image ports.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// No API credential is configured for the provider.
    ///
    /// Raised before any network call is attempted.
    #[error("no API credential configured")]
    MissingCredential,

    /// Provider returned a non-success status.
    #[error("upstream error {status}: {detail}")]
    Upstream {
        /// HTTP status code from the provider.
        status: u16,
        /// Error body, best effort.
        detail: String,
    },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl ModelError {
    /// Creates an upstream error.
    pub fn upstream(status: u16, detail: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            detail: detail.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
