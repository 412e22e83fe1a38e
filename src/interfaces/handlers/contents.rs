use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::domain::embed::normalize;
use crate::entities::course_content::{
    CourseContentResponse, NewCourseContent, UpdateCourseContent,
};
use crate::errors::AppError;
use crate::interfaces::repositories::content::ContentRepository;
use crate::use_cases::extractors::{AdminClaims, AuthClaims};
use crate::AppState;

#[post("/contents")]
pub async fn create_content(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    content: web::Json<NewCourseContent>,
) -> Result<HttpResponse, AppError> {
    let content = content.into_inner();
    content.validate()?;

    let created = state.repo.create_content(&content).await?;
    Ok(HttpResponse::Created().json(CourseContentResponse::try_from(created)?))
}

#[derive(Debug, Deserialize)]
pub struct ContentListQuery {
    pub batch_id: Uuid,
}

#[get("/contents")]
pub async fn list_contents(
    state: web::Data<AppState>,
    _claims: AuthClaims,
    query: web::Query<ContentListQuery>,
) -> Result<HttpResponse, AppError> {
    let contents = state.repo.list_contents_by_batch(&query.batch_id).await?;

    let responses = contents
        .into_iter()
        .map(CourseContentResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HttpResponse::Ok().json(responses))
}

#[get("/contents/{content_id}")]
pub async fn get_content(
    state: web::Data<AppState>,
    _claims: AuthClaims,
    content_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let content = state
        .repo
        .get_content(&content_id.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Course content not found".to_string()))?;

    Ok(HttpResponse::Ok().json(CourseContentResponse::try_from(content)?))
}

#[put("/contents/{content_id}")]
pub async fn update_content(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    content_id: web::Path<Uuid>,
    content: web::Json<UpdateCourseContent>,
) -> Result<HttpResponse, AppError> {
    let content = content.into_inner();
    content.validate()?;

    let updated = state
        .repo
        .update_content(&content_id.into_inner(), &content)
        .await?;
    Ok(HttpResponse::Ok().json(CourseContentResponse::try_from(updated)?))
}

#[delete("/contents/{content_id}")]
pub async fn delete_content(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    content_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.repo.delete_content(&content_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[derive(Debug, Deserialize)]
pub struct EmbedPreviewRequest {
    pub url: String,
}

/// Live preview endpoint for the content editor: classifies a raw link
/// without persisting anything. The same pure classifier runs again when
/// stored records are rendered.
#[post("/contents/embed-preview")]
pub async fn embed_preview(
    _claims: AdminClaims,
    request: web::Json<EmbedPreviewRequest>,
) -> HttpResponse {
    HttpResponse::Ok().json(normalize(&request.url))
}
