use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::models::{LoginResponse, UserResponse};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50, message = "username must be 1-50 characters"))]
    pub username: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// POST /api/register
pub async fn register(
    pool: web::Data<PgPool>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let password_hash = auth_core::password::hash_password(&payload.password)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {e}")))?;

    let user =
        user_repo::create_user(&pool, &payload.username, &payload.email, &password_hash).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// POST /api/login
///
/// Unknown username and wrong password produce the same 401 body so the
/// response does not reveal which usernames exist.
pub async fn login(
    pool: web::Data<PgPool>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let user = user_repo::find_user_by_username(&pool, &payload.username)
        .await?
        .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;

    auth_core::password::verify_password(&payload.password, &user.password_hash)
        .map_err(|_| AppError::Authentication("Invalid credentials".to_string()))?;

    let token = auth_core::jwt::generate_token(user.id)
        .map_err(|e| AppError::Internal(format!("Token generation failed: {e}")))?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user: UserResponse::from(user),
    }))
}
