use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{Json, extract::State, http::StatusCode};
use joblane_core::ApiResponse;
use joblane_model::{LoginRequest, LoginResponse, RegisterRequest, User, UserSummary};

use super::jwt::generate_token;
use crate::errors::{AppError, AppResult};
use crate::infra::app_state::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<()>>)> {
    request
        .validate()
        .map_err(|e| AppError::bad_request(e.to_string()))?;

    if state
        .users
        .get_user_by_email(&request.email)
        .await?
        .is_some()
    {
        return Err(AppError::bad_request("User already exists"));
    }

    // Hash password
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(request.password.as_bytes(), &salt)
        .map_err(|_| AppError::internal("Failed to hash password"))?
        .to_string();

    let user = User::new(request.name, request.email, request.role);
    state
        .users
        .create_user_with_password(&user, &password_hash)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message_only("User registered successfully")),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    // A missing account and a bad password produce the same response.
    let user = state
        .users
        .get_user_by_email(&request.email)
        .await?
        .ok_or_else(|| AppError::bad_request("Invalid credentials"))?;

    let password_hash = state
        .users
        .get_password_hash(user.id)
        .await?
        .ok_or_else(|| AppError::bad_request("Invalid credentials"))?;

    let parsed_hash = PasswordHash::new(&password_hash)
        .map_err(|_| AppError::internal("Invalid password hash"))?;

    Argon2::default()
        .verify_password(request.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::bad_request("Invalid credentials"))?;

    let auth = &state.config.auth;
    let token = generate_token(&user, &auth.token_key, auth.token_ttl_secs)
        .map_err(|_| AppError::internal("Failed to generate token"))?;

    tracing::info!("user {} logged in", user.id);

    Ok(Json(ApiResponse::success(LoginResponse {
        token,
        user: UserSummary::from(&user),
    })))
}
