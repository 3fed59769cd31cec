//! Visual Store Port - Interface for the remote document store.
//!
//! Archived visuals live in a "visuals" collection. Records are created on
//! explicit user action, never mutated, and deleted on explicit user action.
//! There is no transactionality; concurrent writers are last-write-wins.

use async_trait::async_trait;

use crate::domain::{StyleTag, VisualId, VisualRecord};

/// Port for create/list/delete against the document store.
#[async_trait]
pub trait VisualStore: Send + Sync {
    /// Persist a new visual. The store assigns identity and timestamp.
    async fn save(&self, visual: NewVisual) -> Result<VisualRecord, StoreError>;

    /// List all archived visuals, ordered by creation time descending.
    async fn list(&self) -> Result<Vec<VisualRecord>, StoreError>;

    /// Delete a visual by identity.
    async fn delete(&self, id: &VisualId) -> Result<(), StoreError>;
}

/// A visual bundle about to be archived.
///
/// Identity and `created_at` are assigned by the store on save.
#[derive(Debug, Clone)]
pub struct NewVisual {
    /// The original user prompt.
    pub prompt: String,
    /// Generated image as a base64 data URI.
    pub image: String,
    /// Enhanced prompt actually used for generation.
    pub enhanced_prompt: String,
    /// Mermaid diagram source.
    pub mermaid_code: String,
    /// Style the image was generated with.
    pub style: StyleTag,
    /// Display name of the user archiving the record.
    pub saved_by: String,
}

/// Errors from document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Store returned a non-success status.
    #[error("store error {status}: {detail}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Error body, best effort.
        detail: String,
    },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse a store response or document.
    #[error("parse error: {0}")]
    Parse(String),

    /// No record with the given identity.
    #[error("visual not found: {0}")]
    NotFound(String),
}

impl StoreError {
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
