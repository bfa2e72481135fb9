use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::config::StorageConfig;
use crate::domain::media::errors::MediaError;
use crate::domain::media::ports::MediaStorage;

/// Writes uploads to a directory that the HTTP layer serves statically.
pub struct LocalDiskStorage {
    upload_dir: PathBuf,
    public_path: String,
}

impl LocalDiskStorage {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            upload_dir: PathBuf::from(&config.upload_dir),
            public_path: config.public_path.trim_end_matches('/').to_string(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, MediaError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(MediaError::StorageFailed(format!("invalid key: {}", key)));
        }
        Ok(self.upload_dir.join(key))
    }
}

#[async_trait]
impl MediaStorage for LocalDiskStorage {
    async fn store(&self, key: &str, bytes: &[u8]) -> Result<String, MediaError> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.upload_dir).await.map_err(|e| {
            tracing::error!(error = %e, dir = %self.upload_dir.display(), "Failed to create upload dir");
            MediaError::StorageFailed(e.to_string())
        })?;

        fs::write(&path, bytes).await.map_err(|e| {
            tracing::error!(error = %e, file_path = %path.display(), "Failed to save upload");
            MediaError::StorageFailed(e.to_string())
        })?;

        tracing::debug!(file_path = %path.display(), size = bytes.len(), "Upload saved");

        Ok(format!("{}/{}", self.public_path, key))
    }

    async fn remove(&self, key: &str) -> Result<(), MediaError> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(file_path = %path.display(), "Upload removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::error!(error = %e, file_path = %path.display(), "Failed to remove upload");
                Err(MediaError::StorageFailed(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in_temp_dir() -> (LocalDiskStorage, PathBuf) {
        let dir = std::env::temp_dir().join(format!("travel-uploads-{}", uuid::Uuid::new_v4()));
        let storage = LocalDiskStorage::new(&StorageConfig {
            upload_dir: dir.to_string_lossy().into_owned(),
            public_path: "/uploads/".to_string(),
        });
        (storage, dir)
    }

    #[tokio::test]
    async fn test_store_writes_file_and_returns_public_url() {
        let (storage, dir) = storage_in_temp_dir();

        let url = storage.store("1_photo.jpg", b"jpeg").await.unwrap();

        assert_eq!(url, "/uploads/1_photo.jpg");
        assert_eq!(fs::read(dir.join("1_photo.jpg")).await.unwrap(), b"jpeg");

        let _ = fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn test_store_rejects_path_like_keys() {
        let (storage, _) = storage_in_temp_dir();

        assert!(storage.store("../escape", b"x").await.is_err());
        assert!(storage.store("nested/file", b"x").await.is_err());
        assert!(storage.remove("../escape").await.is_err());
    }

    #[tokio::test]
    async fn test_remove_deletes_stored_file() {
        let (storage, dir) = storage_in_temp_dir();
        storage.store("2_map.png", b"png").await.unwrap();

        storage.remove("2_map.png").await.unwrap();

        assert!(!dir.join("2_map.png").exists());
        // Already gone is not an error.
        storage.remove("2_map.png").await.unwrap();

        let _ = fs::remove_dir_all(dir).await;
    }
}
