use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Batch {
    pub id: Uuid,
    pub name: String,
    pub course: String,
    pub start_date: Option<NaiveDate>,
    pub timing: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewBatch {
    #[validate(length(min = 1, max = 120, message = "Batch name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 120, message = "Course is required"))]
    pub course: String,

    pub start_date: Option<NaiveDate>,

    #[validate(length(max = 80, message = "Timing must be at most 80 characters"))]
    pub timing: Option<String>,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBatch {
    #[validate(length(min = 1, max = 120, message = "Batch name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 120, message = "Course is required"))]
    pub course: String,

    pub start_date: Option<NaiveDate>,

    #[validate(length(max = 80, message = "Timing must be at most 80 characters"))]
    pub timing: Option<String>,

    pub active: bool,
}
