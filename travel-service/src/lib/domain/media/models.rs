use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::activity::models::ActivityId;
use crate::domain::media::errors::FileNameError;
use crate::domain::media::errors::MediaError;
use crate::domain::media::errors::MediaIdError;

/// A stored file attached to an activity.
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub id: MediaId,
    pub activity_id: ActivityId,
    /// Public URL the file is served from
    pub url: String,
    pub kind: MediaKind,
    pub created_at: DateTime<Utc>,
}

impl Media {
    pub fn new(activity_id: ActivityId, url: String, kind: MediaKind) -> Self {
        Self {
            id: MediaId::new(),
            activity_id,
            url,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Media unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaId(pub Uuid);

impl MediaId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a media ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, MediaIdError> {
        Uuid::parse_str(s)
            .map(MediaId)
            .map_err(|e| MediaIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for MediaId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    File,
}

impl MediaKind {
    /// Classify an upload by its declared content type.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type {
            Some(ct) if ct.starts_with("image/") => MediaKind::Image,
            Some(ct) if ct.starts_with("video/") => MediaKind::Video,
            _ => MediaKind::File,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::File => "file",
        }
    }

    /// Parse the stored representation; unknown values fall back to `File`.
    pub fn parse(value: &str) -> Self {
        match value {
            "image" => MediaKind::Image,
            "video" => MediaKind::Video,
            _ => MediaKind::File,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client-supplied file name reduced to a single safe path segment.
///
/// Directory components are dropped and anything outside `[A-Za-z0-9._-]`
/// becomes `_`, so the name can never escape the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName(String);

impl FileName {
    const MAX_LENGTH: usize = 200;

    pub fn new(raw: &str) -> Result<Self, FileNameError> {
        let last_segment = raw.rsplit(['/', '\\']).next().unwrap_or_default().trim();

        let sanitized: String = last_segment
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
            return Err(FileNameError::Empty);
        }

        let length = sanitized.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(FileNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(sanitized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A file received for an activity, not yet stored.
#[derive(Debug, Clone)]
pub struct UploadMediaCommand {
    pub file_name: FileName,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadMediaCommand {
    pub const MAX_SIZE: usize = 10 * 1024 * 1024;

    /// # Errors
    /// * `EmptyFile` - No bytes received
    /// * `FileTooLarge` - More than 10 MiB
    pub fn new(
        file_name: FileName,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, MediaError> {
        if bytes.is_empty() {
            return Err(MediaError::EmptyFile);
        }
        if bytes.len() > Self::MAX_SIZE {
            return Err(MediaError::FileTooLarge {
                max: Self::MAX_SIZE,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::from_content_type(self.content_type.as_deref())
    }
}
