use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::entities::placement::{NewPlacement, Placement, UpdatePlacement};
use crate::errors::AppError;
use crate::interfaces::repositories::placement::PlacementRepository;
use crate::use_cases::extractors::{AdminClaims, AuthClaims};
use crate::AppState;

#[post("/placements")]
pub async fn create_placement(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    placement: web::Json<NewPlacement>,
) -> Result<HttpResponse, AppError> {
    let placement = placement.into_inner();
    placement.validate()?;

    let created = state.repo.create_placement(&placement).await?;
    Ok(HttpResponse::Created().json(created))
}

#[get("/placements")]
pub async fn list_placements(
    state: web::Data<AppState>,
    _claims: AuthClaims,
) -> Result<HttpResponse, AppError> {
    let placements = state.repo.list_placements().await?;
    Ok(HttpResponse::Ok().json(placements))
}

#[get("/placements/export.csv")]
pub async fn export_placements_csv(
    state: web::Data<AppState>,
    _claims: AdminClaims,
) -> Result<HttpResponse, AppError> {
    let placements = state.repo.list_placements().await?;
    let csv = placements_to_csv(&placements);

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"placements.csv\"",
        ))
        .body(csv))
}

#[get("/placements/{placement_id}")]
pub async fn get_placement(
    state: web::Data<AppState>,
    _claims: AuthClaims,
    placement_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let placement = state
        .repo
        .get_placement(&placement_id.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Placement not found".to_string()))?;

    Ok(HttpResponse::Ok().json(placement))
}

#[put("/placements/{placement_id}")]
pub async fn update_placement(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    placement_id: web::Path<Uuid>,
    placement: web::Json<UpdatePlacement>,
) -> Result<HttpResponse, AppError> {
    let placement = placement.into_inner();
    placement.validate()?;

    let updated = state
        .repo
        .update_placement(&placement_id.into_inner(), &placement)
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/placements/{placement_id}")]
pub async fn delete_placement(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    placement_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state
        .repo
        .delete_placement(&placement_id.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn placements_to_csv(placements: &[Placement]) -> String {
    let mut csv = String::from("student_id,company,role,package,placed_on\r\n");
    for p in placements {
        let row = [
            p.student_id.to_string(),
            p.company.clone(),
            p.role.clone(),
            p.package.clone().unwrap_or_default(),
            p.placed_on.map(|d| d.to_string()).unwrap_or_default(),
        ];
        let line: Vec<String> = row.iter().map(|f| csv_field(f)).collect();
        csv.push_str(&line.join(","));
        csv.push_str("\r\n");
    }
    csv
}

/// Quotes a field when it contains a delimiter, quote, or line break;
/// embedded quotes are doubled.
pub fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_pass_through() {
        assert_eq!(csv_field("Acme Corp"), "Acme Corp");
    }

    #[test]
    fn delimiters_and_quotes_are_escaped() {
        assert_eq!(csv_field("Acme, Inc."), "\"Acme, Inc.\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
