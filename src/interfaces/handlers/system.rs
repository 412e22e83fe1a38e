use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;

use crate::{constants::START_TIME, interfaces::repositories::user::UserRepository, AppState};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime_seconds: i64,
    timestamp: String,
    start_at: String,
    database: String,
    version: String,
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now = Utc::now();

    let db_status = match state.repo.check_connection().await {
        Ok(_) => "OK",
        Err(_) => "Unavailable",
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy".to_string(),
        uptime_seconds: now.signed_duration_since(*START_TIME).num_seconds(),
        timestamp: now.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        database: db_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
