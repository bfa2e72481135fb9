use async_trait::async_trait;

use crate::domain::activity::models::ActivityId;
use crate::domain::media::errors::MediaError;
use crate::domain::media::models::Media;
use crate::domain::media::models::UploadMediaCommand;
use crate::domain::user::models::UserId;

/// Port for media operations on activities the caller owns.
#[async_trait]
pub trait MediaServicePort: Send + Sync + 'static {
    /// Store an uploaded file and attach it to the activity.
    ///
    /// # Errors
    /// * `ActivityNotFound` - Activity missing or owned by another user
    /// * `StorageFailed` - File could not be written
    async fn upload_media(
        &self,
        owner: &UserId,
        activity_id: &ActivityId,
        command: UploadMediaCommand,
    ) -> Result<Media, MediaError>;

    async fn list_media(
        &self,
        owner: &UserId,
        activity_id: &ActivityId,
    ) -> Result<Vec<Media>, MediaError>;
}

#[async_trait]
pub trait MediaRepository: Send + Sync + 'static {
    async fn create(&self, media: Media) -> Result<Media, MediaError>;

    /// Media of an activity, oldest first.
    async fn list_by_activity(&self, activity_id: &ActivityId) -> Result<Vec<Media>, MediaError>;
}

/// Blob storage for uploaded files.
#[async_trait]
pub trait MediaStorage: Send + Sync + 'static {
    /// Write `bytes` under `key` and return the public URL.
    async fn store(&self, key: &str, bytes: &[u8]) -> Result<String, MediaError>;

    /// Delete the blob stored under `key`. Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> Result<(), MediaError>;
}
