//! Firestore visual store.
//!
//! Talks to the Firestore REST API with API-key authentication. Archived
//! visuals live in the "visuals" collection; listing uses a `runQuery`
//! ordered by `createdAt` descending so the store, not the client, owns the
//! ordering.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::StoreConfig;
use crate::domain::{StyleTag, VisualId, VisualRecord};
use crate::ports::{NewVisual, StoreError, VisualStore};

/// Collection holding archived visuals.
const COLLECTION: &str = "visuals";

/// Configuration for the Firestore store.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// Google Cloud project id.
    pub project_id: String,
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl FirestoreConfig {
    /// Creates a new configuration.
    pub fn new(project_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            api_key: Secret::new(api_key.into()),
            base_url: "https://firestore.googleapis.com/v1".to_string(),
            timeout: Duration::from_secs(30),
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

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Document root path for the project's default database.
    fn documents_root(&self) -> String {
        format!(
            "projects/{}/databases/(default)/documents",
            self.project_id
        )
    }
}

/// Firestore REST implementation of the VisualStore port.
pub struct FirestoreVisualStore {
    config: FirestoreConfig,
    client: Client,
}

impl FirestoreVisualStore {
    /// Creates a new store with the given configuration.
    pub fn new(config: FirestoreConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds a store from the application config, when Firestore is fully
    /// configured. Returns `None` otherwise so callers can fall back to an
    /// in-memory store.
    pub fn from_config(config: &StoreConfig) -> Option<Self> {
        match (&config.firestore_project_id, &config.firestore_api_key) {
            (Some(project), Some(key)) if !project.is_empty() && !key.is_empty() => {
                Some(Self::new(
                    FirestoreConfig::new(project.clone(), key.clone())
                        .with_timeout(config.timeout()),
                ))
            }
            _ => None,
        }
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/{}/{}?key={}",
            self.config.base_url,
            self.config.documents_root(),
            COLLECTION,
            self.config.api_key()
        )
    }

    fn document_url(&self, id: &VisualId) -> String {
        format!(
            "{}/{}/{}/{}?key={}",
            self.config.base_url,
            self.config.documents_root(),
            COLLECTION,
            id,
            self.config.api_key()
        )
    }

    fn run_query_url(&self) -> String {
        format!(
            "{}/{}:runQuery?key={}",
            self.config.base_url,
            self.config.documents_root(),
            self.config.api_key()
        )
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response.text().await.unwrap_or_default();
        Err(StoreError::upstream(status.as_u16(), detail))
    }
}

#[async_trait]
impl VisualStore for FirestoreVisualStore {
    async fn save(&self, visual: NewVisual) -> Result<VisualRecord, StoreError> {
        let created_at = Utc::now();
        let body = json!({ "fields": encode_fields(&visual, created_at) });

        let response = self
            .client
            .post(self.collection_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::network(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let document: Value = response
            .json()
            .await
            .map_err(|e| StoreError::parse(format!("Failed to parse document: {}", e)))?;

        let id = document_id(&document)?;
        Ok(VisualRecord {
            id,
            prompt: visual.prompt,
            image: visual.image,
            enhanced_prompt: visual.enhanced_prompt,
            mermaid_code: visual.mermaid_code,
            style: visual.style,
            saved_by: visual.saved_by,
            created_at,
        })
    }

    async fn list(&self) -> Result<Vec<VisualRecord>, StoreError> {
        let query = json!({
            "structuredQuery": {
                "from": [{ "collectionId": COLLECTION }],
                "orderBy": [{
                    "field": { "fieldPath": "createdAt" },
                    "direction": "DESCENDING"
                }]
            }
        });

        let response = self
            .client
            .post(self.run_query_url())
            .json(&query)
            .send()
            .await
            .map_err(|e| StoreError::network(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let results: Vec<Value> = response
            .json()
            .await
            .map_err(|e| StoreError::parse(format!("Failed to parse query result: {}", e)))?;

        // runQuery interleaves documents with readTime-only entries.
        results
            .iter()
            .filter_map(|entry| entry.get("document"))
            .map(decode_document)
            .collect()
    }

    async fn delete(&self, id: &VisualId) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.document_url(id))
            .send()
            .await
            .map_err(|e| StoreError::network(e.to_string()))?;
        Self::check_status(response).await?;
        Ok(())
    }
}

// ----- Firestore document encoding/decoding -----

fn encode_fields(visual: &NewVisual, created_at: DateTime<Utc>) -> Value {
    json!({
        "prompt": { "stringValue": visual.prompt },
        "image": { "stringValue": visual.image },
        "enhancedPrompt": { "stringValue": visual.enhanced_prompt },
        "mermaidCode": { "stringValue": visual.mermaid_code },
        "style": { "stringValue": visual.style.as_str() },
        "savedBy": { "stringValue": visual.saved_by },
        "createdAt": { "timestampValue": created_at.to_rfc3339() },
    })
}

fn decode_document(document: &Value) -> Result<VisualRecord, StoreError> {
    let fields = document
        .get("fields")
        .ok_or_else(|| StoreError::parse("Document has no fields"))?;

    let style: StyleTag = string_field(fields, "style")?
        .parse()
        .map_err(StoreError::parse)?;

    let created_at = DateTime::parse_from_rfc3339(&timestamp_field(fields, "createdAt")?)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::parse(format!("Bad createdAt timestamp: {}", e)))?;

    Ok(VisualRecord {
        id: document_id(document)?,
        prompt: string_field(fields, "prompt")?,
        image: string_field(fields, "image")?,
        enhanced_prompt: string_field(fields, "enhancedPrompt")?,
        mermaid_code: string_field(fields, "mermaidCode")?,
        style,
        saved_by: string_field(fields, "savedBy")?,
        created_at,
    })
}

fn document_id(document: &Value) -> Result<VisualId, StoreError> {
    document
        .get("name")
        .and_then(Value::as_str)
        .and_then(|name| name.rsplit('/').next())
        .map(VisualId::new)
        .ok_or_else(|| StoreError::parse("Document has no name"))
}

fn string_field(fields: &Value, name: &str) -> Result<String, StoreError> {
    fields
        .get(name)
        .and_then(|f| f.get("stringValue"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| StoreError::parse(format!("Missing string field: {}", name)))
}

fn timestamp_field(fields: &Value, name: &str) -> Result<String, StoreError> {
    fields
        .get(name)
        .and_then(|f| f.get("timestampValue"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| StoreError::parse(format!("Missing timestamp field: {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_visual() -> NewVisual {
        NewVisual {
            prompt: "a fox".to_string(),
            image: "data:image/png;base64,AAAA".to_string(),
            enhanced_prompt: "a detailed fox".to_string(),
            mermaid_code: "graph TD\n    A --> B".to_string(),
            style: StyleTag::Anime,
            saved_by: "io".to_string(),
        }
    }

    #[test]
    fn encode_fields_uses_firestore_typed_values() {
        let fields = encode_fields(&sample_visual(), Utc::now());

        assert_eq!(fields["prompt"]["stringValue"], "a fox");
        assert_eq!(fields["style"]["stringValue"], "anime");
        assert!(fields["createdAt"]["timestampValue"].is_string());
    }

    #[test]
    fn decode_round_trips_an_encoded_document() {
        let created_at = Utc::now();
        let document = json!({
            "name": "projects/p/databases/(default)/documents/visuals/doc-123",
            "fields": encode_fields(&sample_visual(), created_at),
        });

        let record = decode_document(&document).unwrap();
        assert_eq!(record.id.as_str(), "doc-123");
        assert_eq!(record.prompt, "a fox");
        assert_eq!(record.style, StyleTag::Anime);
        assert_eq!(record.created_at, created_at);
    }

    #[test]
    fn decode_rejects_document_without_fields() {
        let document = json!({ "name": "x/visuals/doc-1" });
        assert!(matches!(
            decode_document(&document),
            Err(StoreError::Parse(_))
        ));
    }

    #[test]
    fn from_config_requires_both_project_and_key() {
        let unconfigured = StoreConfig::default();
        assert!(FirestoreVisualStore::from_config(&unconfigured).is_none());

        let half = StoreConfig {
            firestore_project_id: Some("proj".to_string()),
            ..Default::default()
        };
        assert!(FirestoreVisualStore::from_config(&half).is_none());

        let full = StoreConfig {
            firestore_project_id: Some("proj".to_string()),
            firestore_api_key: Some("key".to_string()),
            ..Default::default()
        };
        let store = FirestoreVisualStore::from_config(&full).unwrap();
        assert!(store.collection_url().contains("projects/proj/"));
    }

    #[test]
    fn urls_target_the_visuals_collection() {
        let store = FirestoreVisualStore::new(FirestoreConfig::new("proj", "key"));
        assert_eq!(
            store.collection_url(),
            "https://firestore.googleapis.com/v1/projects/proj/databases/(default)/documents/visuals?key=key"
        );
        assert!(store.run_query_url().contains(":runQuery"));
        assert!(store
            .document_url(&VisualId::new("abc"))
            .contains("/visuals/abc?key="));
    }
}
