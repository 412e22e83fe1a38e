use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::placement::{NewPlacement, Placement, UpdatePlacement};
use crate::errors::AppError;
use crate::interfaces::repositories::sqlx_repo::SqlxRepo;

#[async_trait]
pub trait PlacementRepository: Send + Sync {
    async fn create_placement(&self, placement: &NewPlacement) -> Result<Placement, AppError>;
    async fn list_placements(&self) -> Result<Vec<Placement>, AppError>;
    async fn get_placement(&self, id: &Uuid) -> Result<Option<Placement>, AppError>;
    async fn update_placement(
        &self,
        id: &Uuid,
        placement: &UpdatePlacement,
    ) -> Result<Placement, AppError>;
    async fn delete_placement(&self, id: &Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl PlacementRepository for SqlxRepo {
    async fn create_placement(&self, placement: &NewPlacement) -> Result<Placement, AppError> {
        sqlx::query_as::<_, Placement>(
            r#"INSERT INTO placements (student_id, company, role, package, placed_on)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING *"#,
        )
        .bind(placement.student_id)
        .bind(&placement.company)
        .bind(&placement.role)
        .bind(&placement.package)
        .bind(placement.placed_on)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn list_placements(&self) -> Result<Vec<Placement>, AppError> {
        sqlx::query_as::<_, Placement>(
            "SELECT * FROM placements ORDER BY placed_on DESC NULLS LAST, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_placement(&self, id: &Uuid) -> Result<Option<Placement>, AppError> {
        sqlx::query_as::<_, Placement>("SELECT * FROM placements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update_placement(
        &self,
        id: &Uuid,
        placement: &UpdatePlacement,
    ) -> Result<Placement, AppError> {
        sqlx::query_as::<_, Placement>(
            r#"UPDATE placements
               SET company = $1, role = $2, package = $3, placed_on = $4, updated_at = now()
               WHERE id = $5
               RETURNING *"#,
        )
        .bind(&placement.company)
        .bind(&placement.role)
        .bind(&placement.package)
        .bind(placement.placed_on)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Placement not found".to_string()))
    }

    async fn delete_placement(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM placements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Placement not found".to_string()));
        }
        Ok(())
    }
}
