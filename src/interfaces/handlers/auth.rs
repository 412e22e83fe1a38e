use actix_web::{delete, get, post, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::entities::token::RefreshRequest;
use crate::entities::user::{LoginUser, NewUser, UserResponse};
use crate::errors::AppError;
use crate::interfaces::repositories::user::UserRepository;
use crate::use_cases::extractors::{AdminClaims, AuthClaims};
use crate::AppState;

/// Account creation is admin-gated: students do not self-register, the
/// center's staff creates their accounts.
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    _claims: AdminClaims,
    new_user: web::Json<NewUser>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_handler.register(new_user.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    credentials: web::Json<LoginUser>,
) -> impl Responder {
    match state.auth_handler.login(credentials.into_inner()).await {
        Ok(tokens) => HttpResponse::Ok().json(tokens),
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "Invalid email or password"
            }))
        }
    }
}

#[post("/refresh")]
pub async fn refresh_token(
    state: web::Data<AppState>,
    request: web::Json<RefreshRequest>,
) -> impl Responder {
    match state
        .auth_handler
        .refresh_token(&request.refresh_token)
        .await
    {
        Ok(tokens) => HttpResponse::Ok().json(tokens),
        Err(e) => {
            tracing::warn!("Token refresh failed: {}", e);
            HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "Invalid refresh token"
            }))
        }
    }
}

/// Token invalidation happens client-side; the endpoint exists so clients
/// have a uniform logout call.
#[post("/logout")]
pub async fn logout(_claims: AuthClaims) -> impl Responder {
    HttpResponse::NoContent().finish()
}

#[get("/me")]
pub async fn me(state: web::Data<AppState>, claims: AuthClaims) -> Result<HttpResponse, AppError> {
    let user_id = Uuid::parse_str(&claims.0.sub)
        .map_err(|_| AppError::InternalError("Invalid user ID in claims".to_string()))?;

    let user = state
        .auth_handler
        .user_repo
        .get_user_by_id(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Soft-deletes an account. Admins can remove any account; everyone else
/// only their own. The row is kept until the daily purge task removes it
/// for good after the grace period.
#[delete("/users/{user_id}")]
pub async fn delete_account(
    state: web::Data<AppState>,
    claims: AuthClaims,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let current_id = Uuid::parse_str(&claims.0.sub)
        .map_err(|_| AppError::InternalError("Invalid user ID in claims".to_string()))?;

    let current_user = state
        .auth_handler
        .user_repo
        .get_user_by_id(&current_id)
        .await?
        .ok_or(AppError::UnauthorizedAccess)?;

    state
        .auth_handler
        .delete_user(user_id.into_inner(), &current_user)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
