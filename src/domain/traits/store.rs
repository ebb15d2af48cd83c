use async_trait::async_trait;
use crate::application::errors::StorageError;

/// Users who asked not to receive cooldown whispers
#[async_trait]
pub trait WhisperIgnoreList: Send + Sync {
    async fn is_ignored(&self, user: &str) -> Result<bool, StorageError>;
    async fn add(&self, user: &str) -> Result<(), StorageError>;
    async fn remove(&self, user: &str) -> Result<(), StorageError>;
}

#[async_trait]
impl<T: WhisperIgnoreList + ?Sized> WhisperIgnoreList for Box<T> {
    async fn is_ignored(&self, user: &str) -> Result<bool, StorageError> {
        (**self).is_ignored(user).await
    }

    async fn add(&self, user: &str) -> Result<(), StorageError> {
        (**self).add(user).await
    }

    async fn remove(&self, user: &str) -> Result<(), StorageError> {
        (**self).remove(user).await
    }
}
