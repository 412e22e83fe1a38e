use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::entities::batch::{NewBatch, UpdateBatch};
use crate::errors::AppError;
use crate::interfaces::repositories::batch::BatchRepository;
use crate::use_cases::extractors::{AdminClaims, AuthClaims};
use crate::AppState;

#[post("/batches")]
pub async fn create_batch(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    batch: web::Json<NewBatch>,
) -> Result<HttpResponse, AppError> {
    let batch = batch.into_inner();
    batch.validate()?;

    let created = state.repo.create_batch(&batch).await?;
    Ok(HttpResponse::Created().json(created))
}

#[get("/batches")]
pub async fn list_batches(
    state: web::Data<AppState>,
    _claims: AuthClaims,
) -> Result<HttpResponse, AppError> {
    let batches = state.repo.list_batches().await?;
    Ok(HttpResponse::Ok().json(batches))
}

#[get("/batches/{batch_id}")]
pub async fn get_batch(
    state: web::Data<AppState>,
    _claims: AuthClaims,
    batch_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let batch = state
        .repo
        .get_batch(&batch_id.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Batch not found".to_string()))?;

    Ok(HttpResponse::Ok().json(batch))
}

#[put("/batches/{batch_id}")]
pub async fn update_batch(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    batch_id: web::Path<Uuid>,
    batch: web::Json<UpdateBatch>,
) -> Result<HttpResponse, AppError> {
    let batch = batch.into_inner();
    batch.validate()?;

    let updated = state
        .repo
        .update_batch(&batch_id.into_inner(), &batch)
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/batches/{batch_id}")]
pub async fn delete_batch(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    batch_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.repo.delete_batch(&batch_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
