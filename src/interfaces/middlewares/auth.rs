use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{
    rc::Rc,
    task::{Context, Poll},
};

use crate::errors::AuthError;
use crate::interfaces::repositories::token::TokenServiceRepository;
use crate::AppState;

/// Validates the Bearer token on every non-public route and stores the
/// decoded claims in the request extensions for the extractors to pick up.
pub struct AuthMiddleware;

impl<S> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let path = req.path();
            let method = req.method().as_str();

            if is_public_route(path, method) {
                return service.call(req).await;
            }

            let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
                tracing::error!("AppState missing in middleware");
                AuthError::TokenCreation
            })?;

            let token = extract_token(&req).ok_or_else(|| {
                tracing::warn!("Missing or malformed Authorization header");
                AuthError::MissingCredentials
            })?;

            let decoded = state
                .auth_handler
                .token_service
                .decode_jwt(&token)
                .map_err(Error::from)?;

            req.extensions_mut().insert(decoded.claims);

            service.call(req).await
        })
    }
}

fn is_public_route(path: &str, method: &str) -> bool {
    matches!(
        (path, method),
        ("/", "GET") | ("/health", "GET") | ("/auth/login", "POST") | ("/auth/refresh", "POST")
    )
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
