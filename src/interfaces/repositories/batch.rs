use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::batch::{Batch, NewBatch, UpdateBatch};
use crate::errors::AppError;
use crate::interfaces::repositories::sqlx_repo::SqlxRepo;

#[async_trait]
pub trait BatchRepository: Send + Sync {
    async fn create_batch(&self, batch: &NewBatch) -> Result<Batch, AppError>;
    async fn list_batches(&self) -> Result<Vec<Batch>, AppError>;
    async fn get_batch(&self, id: &Uuid) -> Result<Option<Batch>, AppError>;
    async fn update_batch(&self, id: &Uuid, batch: &UpdateBatch) -> Result<Batch, AppError>;
    async fn delete_batch(&self, id: &Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl BatchRepository for SqlxRepo {
    async fn create_batch(&self, batch: &NewBatch) -> Result<Batch, AppError> {
        sqlx::query_as::<_, Batch>(
            r#"INSERT INTO batches (name, course, start_date, timing, active)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING *"#,
        )
        .bind(&batch.name)
        .bind(&batch.course)
        .bind(batch.start_date)
        .bind(&batch.timing)
        .bind(batch.active)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn list_batches(&self) -> Result<Vec<Batch>, AppError> {
        sqlx::query_as::<_, Batch>("SELECT * FROM batches ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn get_batch(&self, id: &Uuid) -> Result<Option<Batch>, AppError> {
        sqlx::query_as::<_, Batch>("SELECT * FROM batches WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update_batch(&self, id: &Uuid, batch: &UpdateBatch) -> Result<Batch, AppError> {
        sqlx::query_as::<_, Batch>(
            r#"UPDATE batches
               SET name = $1, course = $2, start_date = $3, timing = $4, active = $5,
                   updated_at = now()
               WHERE id = $6
               RETURNING *"#,
        )
        .bind(&batch.name)
        .bind(&batch.course)
        .bind(batch.start_date)
        .bind(&batch.timing)
        .bind(batch.active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Batch not found".to_string()))
    }

    async fn delete_batch(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM batches WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Batch not found".to_string()));
        }
        Ok(())
    }
}
