use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;
use validator::Validate;

use crate::domain::embed::{normalize, EmbedResult};
use crate::errors::AppError;

/// One course-content row as stored. `attachments` is a JSONB column holding
/// a list of [`Attachment`] values; it is validated on read, never trusted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CourseContent {
    pub id: Uuid,
    pub batch_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub attachments: JsonValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Attachment {
    #[validate(length(min = 1, max = 200, message = "Attachment name is required"))]
    pub name: String,

    #[validate(url(message = "Attachment URL must be a valid URL"))]
    pub url: String,
}

impl CourseContent {
    /// Deserializes and validates the stored attachment list. A row whose
    /// JSON does not parse into the typed shape is an error the caller sees,
    /// not a silently emptied list.
    pub fn typed_attachments(&self) -> Result<Vec<Attachment>, AppError> {
        let attachments: Vec<Attachment> = serde_json::from_value(self.attachments.clone())
            .map_err(|e| {
                AppError::InternalError(format!(
                    "Corrupt attachment data on content {}: {}",
                    self.id, e
                ))
            })?;

        for attachment in &attachments {
            attachment.validate().map_err(|e| {
                AppError::InternalError(format!(
                    "Invalid attachment data on content {}: {}",
                    self.id, e
                ))
            })?;
        }

        Ok(attachments)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewCourseContent {
    pub batch_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,

    pub video_url: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseContent {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,

    pub video_url: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub attachments: Vec<Attachment>,
}

/// Response shape with the embed reference recomputed from the raw link on
/// every read. The classification is never stored.
#[derive(Debug, Serialize)]
pub struct CourseContentResponse {
    pub id: Uuid,
    pub batch_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub embed: EmbedResult,
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<CourseContent> for CourseContentResponse {
    type Error = AppError;

    fn try_from(content: CourseContent) -> Result<Self, Self::Error> {
        let attachments = content.typed_attachments()?;
        let embed = content
            .video_url
            .as_deref()
            .map(normalize)
            .unwrap_or(EmbedResult::Invalid);

        Ok(CourseContentResponse {
            id: content.id,
            batch_id: content.batch_id,
            title: content.title,
            description: content.description,
            video_url: content.video_url,
            embed,
            attachments,
            created_at: content.created_at,
            updated_at: content.updated_at,
        })
    }
}
