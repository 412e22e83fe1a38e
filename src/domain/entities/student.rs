use chrono::{DateTime, Datelike, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: Uuid,
    pub student_code: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub batch_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewStudent {
    #[validate(length(min = 1, max = 120, message = "Full name is required"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    pub batch_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudent {
    #[validate(length(min = 1, max = 120, message = "Full name is required"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    pub batch_id: Option<Uuid>,
}

/// Generates a display/reference code like `ST25-K4T9ZQ`. The code is a
/// human-facing identifier only; it is never a credential.
pub fn generate_student_code() -> String {
    let year = Utc::now().year() % 100;
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(|c| (c as char).to_ascii_uppercase())
        .collect();
    format!("ST{:02}-{}", year, suffix)
}
