use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::entities::student::{generate_student_code, NewStudent, UpdateStudent};
use crate::errors::AppError;
use crate::interfaces::repositories::student::StudentRepository;
use crate::use_cases::extractors::{AdminClaims, AuthClaims};
use crate::AppState;

#[post("/students")]
pub async fn create_student(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    student: web::Json<NewStudent>,
) -> Result<HttpResponse, AppError> {
    let student = student.into_inner();
    student.validate()?;

    let student_code = generate_student_code();
    let created = state.repo.create_student(&student, &student_code).await?;
    Ok(HttpResponse::Created().json(created))
}

#[get("/students")]
pub async fn list_students(
    state: web::Data<AppState>,
    _claims: AuthClaims,
) -> Result<HttpResponse, AppError> {
    let students = state.repo.list_students().await?;
    Ok(HttpResponse::Ok().json(students))
}

#[get("/students/{student_id}")]
pub async fn get_student(
    state: web::Data<AppState>,
    _claims: AuthClaims,
    student_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let student = state
        .repo
        .get_student(&student_id.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    Ok(HttpResponse::Ok().json(student))
}

#[put("/students/{student_id}")]
pub async fn update_student(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    student_id: web::Path<Uuid>,
    student: web::Json<UpdateStudent>,
) -> Result<HttpResponse, AppError> {
    let student = student.into_inner();
    student.validate()?;

    let updated = state
        .repo
        .update_student(&student_id.into_inner(), &student)
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/students/{student_id}")]
pub async fn delete_student(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    student_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.repo.delete_student(&student_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
