//! Client orchestrator for the gateway.
//!
//! One user action issues the image and diagram requests concurrently and
//! waits for both before anything is shown. If either half fails the whole
//! action collapses to a single generic error; callers get no per-endpoint
//! distinction. Archive operations pass through to the store port and
//! surface their errors plainly.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::adapters::http::generate::dto::{
    DiagramRequest, DiagramResponse, GenerateRequest, GenerateResponse,
};
use crate::adapters::store::FirestoreVisualStore;
use crate::config::StoreConfig;
use crate::domain::{StyleTag, VisualId, VisualRecord};
use crate::ports::{NewVisual, StoreError, VisualStore};

/// Message shown for any failed generation action.
const PARTIAL_FAILURE_MESSAGE: &str =
    "Something went wrong while generating your visual. Please try again.";

/// A joined generation result: both halves of the fan-out.
#[derive(Debug, Clone)]
pub struct VisualBundle {
    /// The original user prompt.
    pub prompt: String,
    /// Style requested.
    pub style: StyleTag,
    /// Enhanced prompt used for the image.
    pub enhanced_prompt: String,
    /// Generated image as a base64 data URI.
    pub image: String,
    /// Mermaid diagram source.
    pub mermaid_code: String,
}

impl VisualBundle {
    /// Prepares the bundle for archiving under the given archivist name.
    pub fn to_new_visual(&self, saved_by: impl Into<String>) -> NewVisual {
        NewVisual {
            prompt: self.prompt.clone(),
            image: self.image.clone(),
            enhanced_prompt: self.enhanced_prompt.clone(),
            mermaid_code: self.mermaid_code.clone(),
            style: self.style,
            saved_by: saved_by.into(),
        }
    }
}

/// Client-side errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// One or both halves of the fan-out failed.
    #[error("{0}")]
    PartialFailure(String),

    /// An archive operation failed.
    #[error("archive operation failed: {0}")]
    Store(#[from] StoreError),

    /// Archive operations need a configured visual store.
    #[error("no visual store configured")]
    NoStore,
}

/// HTTP client for the gateway plus optional archive access.
pub struct GatewayClient {
    http: Client,
    base_url: String,
    store: Option<Arc<dyn VisualStore>>,
}

impl GatewayClient {
    /// Creates a client for the gateway at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(180))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store: None,
        }
    }

    /// Attaches a visual store for archive operations.
    pub fn with_store(mut self, store: Arc<dyn VisualStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Attaches the Firestore store described by the application config.
    /// A store section without full Firestore credentials leaves archive
    /// operations unconfigured.
    pub fn with_firestore(mut self, config: &StoreConfig) -> Self {
        if let Some(store) = FirestoreVisualStore::from_config(config) {
            self.store = Some(Arc::new(store));
        }
        self
    }

    /// Runs one generation action: both gateway calls concurrently, joined
    /// before returning. Any rejection collapses to a generic failure.
    pub async fn generate(
        &self,
        prompt: &str,
        style: StyleTag,
    ) -> Result<VisualBundle, ClientError> {
        let (visual, diagram) = tokio::join!(
            self.post_generate(prompt, style),
            self.post_diagram(prompt)
        );

        match (visual, diagram) {
            (Ok(visual), Ok(diagram)) => Ok(VisualBundle {
                prompt: prompt.to_string(),
                style,
                enhanced_prompt: visual.enhanced_prompt,
                image: visual.image,
                mermaid_code: diagram.mermaid_code,
            }),
            (visual, diagram) => {
                if let Err(err) = &visual {
                    tracing::warn!(error = %err, "generate call failed");
                }
                if let Err(err) = &diagram {
                    tracing::warn!(error = %err, "diagram call failed");
                }
                Err(ClientError::PartialFailure(
                    PARTIAL_FAILURE_MESSAGE.to_string(),
                ))
            }
        }
    }

    /// Archives a bundle under the given archivist name.
    pub async fn archive(
        &self,
        bundle: &VisualBundle,
        saved_by: &str,
    ) -> Result<VisualRecord, ClientError> {
        let store = self.store.as_ref().ok_or(ClientError::NoStore)?;
        Ok(store.save(bundle.to_new_visual(saved_by)).await?)
    }

    /// Lists archived visuals, newest first.
    pub async fn list_archive(&self) -> Result<Vec<VisualRecord>, ClientError> {
        let store = self.store.as_ref().ok_or(ClientError::NoStore)?;
        Ok(store.list().await?)
    }

    /// Deletes an archived visual.
    pub async fn delete_archived(&self, id: &VisualId) -> Result<(), ClientError> {
        let store = self.store.as_ref().ok_or(ClientError::NoStore)?;
        Ok(store.delete(id).await?)
    }

    async fn post_generate(
        &self,
        prompt: &str,
        style: StyleTag,
    ) -> Result<GenerateResponse, reqwest::Error> {
        let request = GenerateRequest {
            prompt: prompt.to_string(),
            style,
        };

        self.http
            .post(format!("{}/generate", self.base_url))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn post_diagram(&self, prompt: &str) -> Result<DiagramResponse, reqwest::Error> {
        let request = DiagramRequest {
            prompt: prompt.to_string(),
        };

        self.http
            .post(format!("{}/generate-diagram", self.base_url))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
