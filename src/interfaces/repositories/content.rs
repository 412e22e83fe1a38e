use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::course_content::{CourseContent, NewCourseContent, UpdateCourseContent};
use crate::errors::AppError;
use crate::interfaces::repositories::sqlx_repo::SqlxRepo;

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn create_content(&self, content: &NewCourseContent) -> Result<CourseContent, AppError>;
    async fn list_contents_by_batch(&self, batch_id: &Uuid)
        -> Result<Vec<CourseContent>, AppError>;
    async fn get_content(&self, id: &Uuid) -> Result<Option<CourseContent>, AppError>;
    async fn update_content(
        &self,
        id: &Uuid,
        content: &UpdateCourseContent,
    ) -> Result<CourseContent, AppError>;
    async fn delete_content(&self, id: &Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl ContentRepository for SqlxRepo {
    async fn create_content(&self, content: &NewCourseContent) -> Result<CourseContent, AppError> {
        let attachments = serde_json::to_value(&content.attachments)
            .map_err(|e| AppError::InternalError(format!("Attachment serialization: {}", e)))?;

        sqlx::query_as::<_, CourseContent>(
            r#"INSERT INTO course_contents (batch_id, title, description, video_url, attachments)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING *"#,
        )
        .bind(content.batch_id)
        .bind(&content.title)
        .bind(&content.description)
        .bind(&content.video_url)
        .bind(attachments)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn list_contents_by_batch(
        &self,
        batch_id: &Uuid,
    ) -> Result<Vec<CourseContent>, AppError> {
        sqlx::query_as::<_, CourseContent>(
            "SELECT * FROM course_contents WHERE batch_id = $1 ORDER BY created_at DESC",
        )
        .bind(batch_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_content(&self, id: &Uuid) -> Result<Option<CourseContent>, AppError> {
        sqlx::query_as::<_, CourseContent>("SELECT * FROM course_contents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update_content(
        &self,
        id: &Uuid,
        content: &UpdateCourseContent,
    ) -> Result<CourseContent, AppError> {
        let attachments = serde_json::to_value(&content.attachments)
            .map_err(|e| AppError::InternalError(format!("Attachment serialization: {}", e)))?;

        sqlx::query_as::<_, CourseContent>(
            r#"UPDATE course_contents
               SET title = $1, description = $2, video_url = $3, attachments = $4,
                   updated_at = now()
               WHERE id = $5
               RETURNING *"#,
        )
        .bind(&content.title)
        .bind(&content.description)
        .bind(&content.video_url)
        .bind(attachments)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Course content not found".to_string()))
    }

    async fn delete_content(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM course_contents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Course content not found".to_string()));
        }
        Ok(())
    }
}
