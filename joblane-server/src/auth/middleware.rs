use std::future::Future;
use std::pin::Pin;

use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use joblane_core::ApiResponse;
use joblane_model::{Role, User};

use super::jwt::validate_token;
use crate::errors::AppError;
use crate::infra::app_state::AppState;

/// Require a valid token and a live account; the user lands in the request
/// extensions for handlers and role gates downstream.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&request)
        .ok_or_else(|| AppError::unauthorized("No token, authorization denied"))?;
    let user = validate_and_get_user(&state, &token).await?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Like [`auth_middleware`] but anonymous requests pass through untouched.
/// Used by the public listing endpoint so role-based visibility can apply.
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = extract_token(&request)
        && let Ok(user) = validate_and_get_user(&state, &token).await
    {
        request.extensions_mut().insert(user);
    }

    next.run(request).await
}

/// Gate a route on the caller's role. Must run after [`auth_middleware`] in
/// the layer stack.
pub fn require_role(
    roles: &'static [Role],
) -> impl Fn(Request, Next) -> Pin<Box<dyn Future<Output = Response> + Send>>
+ Clone
+ Send
+ Sync
+ 'static {
    move |request: Request, next: Next| Box::pin(check_role_async(request, next, roles))
}

async fn check_role_async(request: Request, next: Next, roles: &[Role]) -> Response {
    let user = match request.extensions().get::<User>() {
        Some(user) => user,
        None => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<()>::error(
                    "Authentication required".to_string(),
                )),
            )
                .into_response();
        }
    };

    if !roles.contains(&user.role) {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error("Access denied".to_string())),
        )
            .into_response();
    }

    next.run(request).await
}

/// The original client sends the raw token in `Authorization`; standard
/// clients send `Bearer <token>`. Accept both.
fn extract_token(request: &Request) -> Option<String> {
    let value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())?;

    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

async fn validate_and_get_user(state: &AppState, token: &str) -> Result<User, AppError> {
    let claims = validate_token(token, &state.config.auth.token_key)
        .map_err(|_| AppError::unauthorized("Token is not valid"))?;

    // A token outliving its account is rejected.
    state
        .users
        .get_user_by_id(claims.user_id())
        .await?
        .ok_or_else(|| AppError::unauthorized("Token is not valid"))
}
