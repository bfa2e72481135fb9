use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::activity::models::ActivityId;
use crate::domain::activity::ports::ActivityRepository;
use crate::domain::media::errors::MediaError;
use crate::domain::media::models::Media;
use crate::domain::media::models::UploadMediaCommand;
use crate::domain::media::ports::MediaRepository;
use crate::domain::media::ports::MediaServicePort;
use crate::domain::media::ports::MediaStorage;
use crate::domain::trip::ports::TripRepository;
use crate::domain::user::models::UserId;

pub struct MediaService<MR, MS, AR, TR>
where
    MR: MediaRepository,
    MS: MediaStorage,
    AR: ActivityRepository,
    TR: TripRepository,
{
    media: Arc<MR>,
    storage: Arc<MS>,
    activities: Arc<AR>,
    trips: Arc<TR>,
}

impl<MR, MS, AR, TR> MediaService<MR, MS, AR, TR>
where
    MR: MediaRepository,
    MS: MediaStorage,
    AR: ActivityRepository,
    TR: TripRepository,
{
    pub fn new(media: Arc<MR>, storage: Arc<MS>, activities: Arc<AR>, trips: Arc<TR>) -> Self {
        Self {
            media,
            storage,
            activities,
            trips,
        }
    }

    async fn ensure_activity_owner(
        &self,
        owner: &UserId,
        activity_id: &ActivityId,
    ) -> Result<(), MediaError> {
        let not_found = || MediaError::ActivityNotFound(activity_id.to_string());

        let activity = self
            .activities
            .find_by_id(activity_id)
            .await?
            .ok_or_else(not_found)?;

        let owned = self
            .trips
            .find_by_id(&activity.trip_id)
            .await
            .map_err(|e| MediaError::DatabaseError(e.to_string()))?
            .is_some_and(|trip| trip.is_owned_by(owner));

        if owned {
            Ok(())
        } else {
            Err(not_found())
        }
    }
}

#[async_trait]
impl<MR, MS, AR, TR> MediaServicePort for MediaService<MR, MS, AR, TR>
where
    MR: MediaRepository,
    MS: MediaStorage,
    AR: ActivityRepository,
    TR: TripRepository,
{
    async fn upload_media(
        &self,
        owner: &UserId,
        activity_id: &ActivityId,
        command: UploadMediaCommand,
    ) -> Result<Media, MediaError> {
        self.ensure_activity_owner(owner, activity_id).await?;

        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let key = format!("{}_{}", nanos, command.file_name.as_str());
        let url = self.storage.store(&key, &command.bytes).await?;

        let created = match self
            .media
            .create(Media::new(*activity_id, url, command.kind()))
            .await
        {
            Ok(created) => created,
            Err(e) => {
                if let Err(cleanup) = self.storage.remove(&key).await {
                    tracing::warn!(key = %key, error = %cleanup, "Orphaned upload left in storage");
                }
                return Err(e);
            }
        };

        tracing::info!(
            media_id = %created.id,
            activity_id = %activity_id,
            kind = %created.kind,
            size = command.bytes.len(),
            "Media uploaded"
        );

        Ok(created)
    }

    async fn list_media(
        &self,
        owner: &UserId,
        activity_id: &ActivityId,
    ) -> Result<Vec<Media>, MediaError> {
        self.ensure_activity_owner(owner, activity_id).await?;
        self.media.list_by_activity(activity_id).await
    }
}
