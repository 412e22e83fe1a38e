use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::entities::interview::{NewInterview, UpdateInterview};
use crate::errors::AppError;
use crate::interfaces::repositories::interview::InterviewRepository;
use crate::use_cases::extractors::{AdminClaims, AuthClaims};
use crate::AppState;

#[post("/interviews")]
pub async fn create_interview(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    interview: web::Json<NewInterview>,
) -> Result<HttpResponse, AppError> {
    let interview = interview.into_inner();
    interview.validate()?;

    let created = state.repo.create_interview(&interview).await?;
    Ok(HttpResponse::Created().json(created))
}

#[derive(Debug, Deserialize)]
pub struct InterviewListQuery {
    pub student_id: Option<Uuid>,
}

#[get("/interviews")]
pub async fn list_interviews(
    state: web::Data<AppState>,
    _claims: AuthClaims,
    query: web::Query<InterviewListQuery>,
) -> Result<HttpResponse, AppError> {
    let interviews = match query.student_id {
        Some(student_id) => state.repo.list_interviews_for_student(&student_id).await?,
        None => state.repo.list_interviews().await?,
    };

    Ok(HttpResponse::Ok().json(interviews))
}

#[get("/interviews/{interview_id}")]
pub async fn get_interview(
    state: web::Data<AppState>,
    _claims: AuthClaims,
    interview_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let interview = state
        .repo
        .get_interview(&interview_id.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Interview not found".to_string()))?;

    Ok(HttpResponse::Ok().json(interview))
}

#[put("/interviews/{interview_id}")]
pub async fn update_interview(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    interview_id: web::Path<Uuid>,
    interview: web::Json<UpdateInterview>,
) -> Result<HttpResponse, AppError> {
    let interview = interview.into_inner();
    interview.validate()?;

    let updated = state
        .repo
        .update_interview(&interview_id.into_inner(), &interview)
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/interviews/{interview_id}")]
pub async fn delete_interview(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    interview_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state
        .repo
        .delete_interview(&interview_id.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
