use actix_web::{post, web, HttpResponse};
use crate::entities::resume::ResumeData;
use crate::errors::{AppError, DocumentError};
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

/// Generates the editable resume document from the posted editing-session
/// snapshot. The required-field gate runs before any asset work; a failed
/// export never leaves partial output.
#[post("/resume/export/document")]
pub async fn export_resume_document(
    state: web::Data<AppState>,
    _claims: AuthClaims,
    data: web::Json<ResumeData>,
) -> Result<HttpResponse, AppError> {
    let blob = state
        .exporter
        .export_document(&data)
        .await
        .map_err(log_export_failure)?;

    Ok(HttpResponse::Ok()
        .content_type("application/rtf")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"resume.rtf\"",
        ))
        .body(blob))
}

/// Generates the standalone printable HTML page for the browser's
/// print-to-PDF pipeline.
#[post("/resume/export/print")]
pub async fn export_resume_printable(
    state: web::Data<AppState>,
    _claims: AuthClaims,
    data: web::Json<ResumeData>,
) -> Result<HttpResponse, AppError> {
    let markup = state
        .exporter
        .export_printable(&data)
        .await
        .map_err(log_export_failure)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(markup))
}

fn log_export_failure(err: DocumentError) -> AppError {
    if let DocumentError::AssetLoad(msg) = &err {
        tracing::error!("Resume export failed: {}", msg);
    }
    AppError::from(err)
}
