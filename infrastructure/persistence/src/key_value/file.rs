use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use business::domain::errors::StorageError;
use business::domain::storage::KeyValueStorage;

/// Key-value storage backed by a single JSON object on disk, the local
/// equivalent of browser storage.
///
/// Writes go to a sibling temp file which then replaces the original, so a
/// crash mid-write leaves the previous contents intact.
pub struct FileKeyValueStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                tracing::warn!(path = %self.path.display(), error = %e, "storage file is not a JSON object");
                StorageError::read()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to read storage file");
                Err(StorageError::read())
            }
        }
    }

    async fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|_| StorageError::write())?;
        }

        let raw = serde_json::to_string_pretty(items).map_err(|_| StorageError::write())?;
        let tmp = self.path.with_extension("tmp");

        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|_| StorageError::write())?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "failed to replace storage file");
            StorageError::write()
        })
    }
}

#[async_trait]
impl KeyValueStorage for FileKeyValueStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.read_all().await?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items).await?;

        tracing::debug!(key, path = %self.path.display(), "stored item");
        Ok(())
    }
}
