use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Placement {
    pub id: Uuid,
    pub student_id: Uuid,
    pub company: String,
    pub role: String,
    pub package: Option<String>,
    pub placed_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewPlacement {
    pub student_id: Uuid,

    #[validate(length(min = 1, max = 120, message = "Company is required"))]
    pub company: String,

    #[validate(length(min = 1, max = 120, message = "Role is required"))]
    pub role: String,

    #[validate(length(max = 40, message = "Package must be at most 40 characters"))]
    pub package: Option<String>,

    pub placed_on: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlacement {
    #[validate(length(min = 1, max = 120, message = "Company is required"))]
    pub company: String,

    #[validate(length(min = 1, max = 120, message = "Role is required"))]
    pub role: String,

    #[validate(length(max = 40, message = "Package must be at most 40 characters"))]
    pub package: Option<String>,

    pub placed_on: Option<NaiveDate>,
}
