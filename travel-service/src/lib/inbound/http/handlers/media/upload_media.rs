use axum::extract::Multipart;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::activity::models::ActivityId;
use crate::domain::media::errors::MediaError;
use crate::domain::media::models::FileName;
use crate::domain::media::models::UploadMediaCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MediaResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Accepts a multipart form with an `activity_id` text field and a `file` part.
pub async fn upload_media(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    multipart: Multipart,
) -> Result<ApiSuccess<MediaResponseData>, ApiError> {
    let (activity_id, command) = read_upload_form(multipart).await?;

    state
        .media_service
        .upload_media(&auth_user.user_id, &activity_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref media| ApiSuccess::new(StatusCode::OK, media.into()))
}

async fn read_upload_form(
    mut multipart: Multipart,
) -> Result<(ActivityId, UploadMediaCommand), ApiError> {
    let mut activity_id = None;
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        match field.name() {
            Some("activity_id") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.body_text()))?;
                let id = ActivityId::from_string(raw.trim())
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                activity_id = Some(id);
            }
            Some("file") => {
                let file_name = FileName::new(field.file_name().unwrap_or_default())
                    .map_err(MediaError::from)?;
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.body_text()))?;

                upload = Some(UploadMediaCommand::new(
                    file_name,
                    content_type,
                    bytes.to_vec(),
                )?);
            }
            _ => {}
        }
    }

    let activity_id =
        activity_id.ok_or_else(|| ApiError::BadRequest("Missing activity_id".to_string()))?;
    let upload = upload.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;

    Ok((activity_id, upload))
}
