use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::interview::{Interview, NewInterview, UpdateInterview};
use crate::errors::AppError;
use crate::interfaces::repositories::sqlx_repo::SqlxRepo;

#[async_trait]
pub trait InterviewRepository: Send + Sync {
    async fn create_interview(&self, interview: &NewInterview) -> Result<Interview, AppError>;
    async fn list_interviews(&self) -> Result<Vec<Interview>, AppError>;
    async fn list_interviews_for_student(
        &self,
        student_id: &Uuid,
    ) -> Result<Vec<Interview>, AppError>;
    async fn get_interview(&self, id: &Uuid) -> Result<Option<Interview>, AppError>;
    async fn update_interview(
        &self,
        id: &Uuid,
        interview: &UpdateInterview,
    ) -> Result<Interview, AppError>;
    async fn delete_interview(&self, id: &Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl InterviewRepository for SqlxRepo {
    async fn create_interview(&self, interview: &NewInterview) -> Result<Interview, AppError> {
        sqlx::query_as::<_, Interview>(
            r#"INSERT INTO interviews (student_id, company, role, scheduled_at, mode, meeting_link, status)
               VALUES ($1, $2, $3, $4, $5, $6, 'scheduled')
               RETURNING *"#,
        )
        .bind(interview.student_id)
        .bind(&interview.company)
        .bind(&interview.role)
        .bind(interview.scheduled_at)
        .bind(interview.mode)
        .bind(&interview.meeting_link)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn list_interviews(&self) -> Result<Vec<Interview>, AppError> {
        sqlx::query_as::<_, Interview>("SELECT * FROM interviews ORDER BY scheduled_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn list_interviews_for_student(
        &self,
        student_id: &Uuid,
    ) -> Result<Vec<Interview>, AppError> {
        sqlx::query_as::<_, Interview>(
            "SELECT * FROM interviews WHERE student_id = $1 ORDER BY scheduled_at ASC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_interview(&self, id: &Uuid) -> Result<Option<Interview>, AppError> {
        sqlx::query_as::<_, Interview>("SELECT * FROM interviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update_interview(
        &self,
        id: &Uuid,
        interview: &UpdateInterview,
    ) -> Result<Interview, AppError> {
        sqlx::query_as::<_, Interview>(
            r#"UPDATE interviews
               SET company = $1, role = $2, scheduled_at = $3, mode = $4,
                   meeting_link = $5, status = $6, updated_at = now()
               WHERE id = $7
               RETURNING *"#,
        )
        .bind(&interview.company)
        .bind(&interview.role)
        .bind(interview.scheduled_at)
        .bind(interview.mode)
        .bind(&interview.meeting_link)
        .bind(interview.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Interview not found".to_string()))
    }

    async fn delete_interview(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM interviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Interview not found".to_string()));
        }
        Ok(())
    }
}
