//! In-memory visual store.
//!
//! Stores archived visuals in a HashMap behind an async RwLock.
//! Useful for testing and single-process development.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{VisualId, VisualRecord};
use crate::ports::{NewVisual, StoreError, VisualStore};

/// In-memory implementation of the VisualStore port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVisualStore {
    records: Arc<RwLock<HashMap<VisualId, VisualRecord>>>,
}

impl InMemoryVisualStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Clear all stored records (useful for tests).
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl VisualStore for InMemoryVisualStore {
    async fn save(&self, visual: NewVisual) -> Result<VisualRecord, StoreError> {
        let record = VisualRecord {
            id: VisualId::new(Uuid::new_v4().to_string()),
            prompt: visual.prompt,
            image: visual.image,
            enhanced_prompt: visual.enhanced_prompt,
            mermaid_code: visual.mermaid_code,
            style: visual.style,
            saved_by: visual.saved_by,
            created_at: Utc::now(),
        };

        let mut records = self.records.write().await;
        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<VisualRecord>, StoreError> {
        let records = self.records.read().await;
        let mut all: Vec<VisualRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn delete(&self, id: &VisualId) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StyleTag;
    use chrono::{Duration, Utc};

    fn new_visual(prompt: &str) -> NewVisual {
        NewVisual {
            prompt: prompt.to_string(),
            image: "data:image/png;base64,AAAA".to_string(),
            enhanced_prompt: format!("{}, detailed", prompt),
            mermaid_code: "graph TD\n    A --> B".to_string(),
            style: StyleTag::Photorealistic,
            saved_by: "tester".to_string(),
        }
    }

    #[tokio::test]
    async fn save_assigns_identity_and_timestamp() {
        let store = InMemoryVisualStore::new();
        let before = Utc::now() - Duration::seconds(1);

        let record = store.save(new_visual("a fox")).await.unwrap();
        assert!(!record.id.as_str().is_empty());
        assert!(record.created_at > before);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn list_orders_by_created_at_descending() {
        let store = InMemoryVisualStore::new();

        // Force distinct timestamps by editing the stored records directly.
        for (i, prompt) in ["first", "second", "third"].iter().enumerate() {
            let record = store.save(new_visual(prompt)).await.unwrap();
            let mut records = store.records.write().await;
            let stored = records.get_mut(&record.id).unwrap();
            stored.created_at = Utc::now() - Duration::seconds(60 - i as i64);
        }

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].prompt, "third");
        assert_eq!(listed[1].prompt, "second");
        assert_eq!(listed[2].prompt, "first");
        assert!(listed[0].created_at > listed[1].created_at);
        assert!(listed[1].created_at > listed[2].created_at);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = InMemoryVisualStore::new();
        let record = store.save(new_visual("a fox")).await.unwrap();

        store.delete(&record.id).await.unwrap();
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let store = InMemoryVisualStore::new();
        let result = store.delete(&VisualId::new("missing")).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
