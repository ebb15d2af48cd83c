//! In-memory storage implementation

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::errors::StorageError;
use crate::domain::traits::WhisperIgnoreList;

/// Ignore list kept only for the lifetime of the process
#[derive(Clone, Default)]
pub struct MemoryStore {
    ignored: Arc<RwLock<HashSet<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WhisperIgnoreList for MemoryStore {
    async fn is_ignored(&self, user: &str) -> Result<bool, StorageError> {
        let ignored = self.ignored.read().await;
        Ok(ignored.contains(user))
    }

    async fn add(&self, user: &str) -> Result<(), StorageError> {
        let mut ignored = self.ignored.write().await;
        ignored.insert(user.to_string());
        Ok(())
    }

    async fn remove(&self, user: &str) -> Result<(), StorageError> {
        let mut ignored = self.ignored.write().await;
        ignored.remove(user);
        Ok(())
    }
}
