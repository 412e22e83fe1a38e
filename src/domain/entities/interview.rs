use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "interview_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "interview_mode", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InterviewMode {
    Online,
    Onsite,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Interview {
    pub id: Uuid,
    pub student_id: Uuid,
    pub company: String,
    pub role: String,
    pub scheduled_at: DateTime<Utc>,
    pub mode: InterviewMode,
    pub meeting_link: Option<String>,
    pub status: InterviewStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewInterview {
    pub student_id: Uuid,

    #[validate(length(min = 1, max = 120, message = "Company is required"))]
    pub company: String,

    #[validate(length(min = 1, max = 120, message = "Role is required"))]
    pub role: String,

    pub scheduled_at: DateTime<Utc>,

    pub mode: InterviewMode,

    #[validate(url(message = "Meeting link must be a valid URL"))]
    pub meeting_link: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInterview {
    #[validate(length(min = 1, max = 120, message = "Company is required"))]
    pub company: String,

    #[validate(length(min = 1, max = 120, message = "Role is required"))]
    pub role: String,

    pub scheduled_at: DateTime<Utc>,

    pub mode: InterviewMode,

    #[validate(url(message = "Meeting link must be a valid URL"))]
    pub meeting_link: Option<String>,

    pub status: InterviewStatus,
}
