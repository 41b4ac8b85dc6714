use async_trait::async_trait;

use crate::domain::errors::StorageError;

/// Durable string-keyed store scoped to a single client.
///
/// Values are opaque blobs; callers own their serialization format.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Returns `None` when nothing has been stored under `key` yet.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
