use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::models::UserResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 50, message = "username must be 1-50 characters"))]
    pub username: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
}

/// GET /api/users/{id}
pub async fn get_user(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let id = path.into_inner();

    let user = user_repo::find_user_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// PUT /api/users/{id}
pub async fn update_user(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;
    let id = path.into_inner();

    let user = user_repo::update_user(&pool, id, &payload.username, &payload.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    tracing::info!(user_id = %user.id, "User updated");

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// DELETE /api/users/{id}
///
/// Content authored by the user is intentionally left behind; the blog
/// and comment services treat rows with an absent author as orphaned.
pub async fn delete_user(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let id = path.into_inner();

    if !user_repo::delete_user(&pool, id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    tracing::info!(user_id = %id, "User deleted");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "User deleted successfully",
        "note": "Blogs and comments by this user are now orphaned"
    })))
}
