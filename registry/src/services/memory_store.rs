//! In-memory engineer store
//!
//! The production store backing the registry process. Records live in a
//! `HashMap` behind a single `RwLock` together with the id counter, so the
//! duplicate-email check, id assignment, and insert happen under one write
//! lock and concurrent creates cannot race each other.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::traits::EngineerStore;
use shared::{Engineer, RegistryError, RegistryResult};

/// Collection plus id counter, guarded as one unit
struct StoreInner {
    engineers: HashMap<u64, Engineer>,
    next_id: u64,
}

/// Real in-memory store implementation
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryStore {
    /// Create an empty store; ids start at 1
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                engineers: HashMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.inner.read().await.engineers.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.engineers.is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EngineerStore for InMemoryStore {
    async fn create(&self, mut engineer: Engineer) -> RegistryResult<Engineer> {
        let mut inner = self.inner.write().await;

        // Uniqueness check and insert under the same write lock
        if inner.engineers.values().any(|e| e.email == engineer.email) {
            return Err(RegistryError::DuplicateEmail {
                email: engineer.email,
            });
        }

        engineer.id = inner.next_id;
        inner.next_id += 1;
        inner.engineers.insert(engineer.id, engineer.clone());

        info!("📇 Stored engineer {} ({})", engineer.id, engineer.email);
        Ok(engineer)
    }

    async fn get_by_id(&self, id: u64) -> Option<Engineer> {
        self.inner.read().await.engineers.get(&id).cloned()
    }

    async fn get_by_email(&self, email: &str) -> Option<Engineer> {
        let inner = self.inner.read().await;
        inner.engineers.values().find(|e| e.email == email).cloned()
    }

    async fn get_all(&self) -> Vec<Engineer> {
        let inner = self.inner.read().await;
        // HashMap iteration order is arbitrary; ids are assignment-ordered
        let mut engineers: Vec<Engineer> = inner.engineers.values().cloned().collect();
        engineers.sort_by_key(|e| e.id);
        engineers
    }

    async fn update(&self, engineer: Engineer) -> RegistryResult<Engineer> {
        let mut inner = self.inner.write().await;

        if !inner.engineers.contains_key(&engineer.id) {
            return Err(RegistryError::NotFound { id: engineer.id });
        }

        inner.engineers.insert(engineer.id, engineer.clone());
        debug!("📇 Updated engineer {}", engineer.id);
        Ok(engineer)
    }

    async fn delete(&self, id: u64) -> bool {
        let mut inner = self.inner.write().await;
        let removed = inner.engineers.remove(&id).is_some();
        if removed {
            info!("🗑️ Deleted engineer {}", id);
        }
        // next_id is never decremented, so deleted ids are not reused
        removed
    }

    async fn find_available(&self) -> Vec<Engineer> {
        let inner = self.inner.read().await;
        let mut engineers: Vec<Engineer> = inner
            .engineers
            .values()
            .filter(|e| e.is_available)
            .cloned()
            .collect();
        engineers.sort_by_key(|e| e.id);
        engineers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tests::fixtures::draft;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = InMemoryStore::new();

        let first = store.create(draft("a@x.com").into_engineer()).await.unwrap();
        let second = store.create(draft("b@x.com").into_engineer()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_create_ignores_caller_supplied_id() {
        let store = InMemoryStore::new();

        let mut engineer = draft("a@x.com").into_engineer();
        engineer.id = 999;

        let stored = store.create(engineer).await.unwrap();
        assert_eq!(stored.id, 1);
        assert!(store.get_by_id(999).await.is_none());
    }
}
