//! Visual store configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Remote visual store configuration.
///
/// When no Firestore project is configured the application falls back to
/// an in-memory store, which is enough for development.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Firestore project identifier
    pub firestore_project_id: Option<String>,

    /// Firestore API key
    pub firestore_api_key: Option<String>,

    /// Store request timeout in seconds
    #[serde(default = "default_store_timeout")]
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Get store timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if Firestore is fully configured
    pub fn has_firestore(&self) -> bool {
        self.firestore_project_id
            .as_ref()
            .is_some_and(|p| !p.is_empty())
            && self
                .firestore_api_key
                .as_ref()
                .is_some_and(|k| !k.is_empty())
    }

    /// Validate store configuration
    ///
    /// Rejects a half-configured Firestore section, where only one of
    /// project id and API key is present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let has_project = self
            .firestore_project_id
            .as_ref()
            .is_some_and(|p| !p.is_empty());
        let has_key = self
            .firestore_api_key
            .as_ref()
            .is_some_and(|k| !k.is_empty());

        if has_project != has_key {
            return Err(ValidationError::IncompleteFirestoreConfig);
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            firestore_project_id: None,
            firestore_api_key: None,
            timeout_secs: default_store_timeout(),
        }
    }
}

fn default_store_timeout() -> u64 {
    30
}
