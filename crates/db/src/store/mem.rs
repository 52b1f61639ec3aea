//! In-memory collection, used by unit and HTTP integration tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Collection, Document, StoreError};

/// A collection backed by a `BTreeMap` so `find_all` order is deterministic
/// (sorted by id).
pub struct MemCollection<T> {
    items: RwLock<BTreeMap<String, T>>,
}

impl<T> MemCollection<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<T> Default for MemCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Document> Collection<T> for MemCollection<T> {
    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.items.read().await.contains_key(id))
    }

    async fn save(&self, entity: &T) -> Result<(), StoreError> {
        self.items
            .write()
            .await
            .insert(entity.id().to_string(), entity.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.items.write().await.remove(id).is_some())
    }
}
