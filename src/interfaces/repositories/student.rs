use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::student::{NewStudent, Student, UpdateStudent};
use crate::errors::AppError;
use crate::interfaces::repositories::sqlx_repo::SqlxRepo;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create_student(
        &self,
        student: &NewStudent,
        student_code: &str,
    ) -> Result<Student, AppError>;
    async fn list_students(&self) -> Result<Vec<Student>, AppError>;
    async fn get_student(&self, id: &Uuid) -> Result<Option<Student>, AppError>;
    async fn update_student(&self, id: &Uuid, student: &UpdateStudent)
        -> Result<Student, AppError>;
    async fn delete_student(&self, id: &Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl StudentRepository for SqlxRepo {
    async fn create_student(
        &self,
        student: &NewStudent,
        student_code: &str,
    ) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            r#"INSERT INTO students (student_code, full_name, email, phone, batch_id)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING *"#,
        )
        .bind(student_code)
        .bind(&student.full_name)
        .bind(&student.email)
        .bind(&student.phone)
        .bind(student.batch_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                AppError::Conflict("Student with this email or code already exists".to_string())
            }
            _ => AppError::from(e),
        })
    }

    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn get_student(&self, id: &Uuid) -> Result<Option<Student>, AppError> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update_student(
        &self,
        id: &Uuid,
        student: &UpdateStudent,
    ) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            r#"UPDATE students
               SET full_name = $1, email = $2, phone = $3, batch_id = $4, updated_at = now()
               WHERE id = $5
               RETURNING *"#,
        )
        .bind(&student.full_name)
        .bind(&student.email)
        .bind(&student.phone)
        .bind(student.batch_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    async fn delete_student(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Student not found".to_string()));
        }
        Ok(())
    }
}
