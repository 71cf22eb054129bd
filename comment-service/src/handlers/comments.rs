use actix_middleware::UserId;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::db::{comment_repo, reference};
use crate::error::{AppError, Result};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    pub post_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub post_id: Option<Uuid>,
}

/// POST /api/comments
///
/// Two gates before the insert: the commenting user must still exist,
/// and the target post must exist with its author still present. The
/// post-gone and author-gone cases get the same 404 body.
pub async fn create_comment(
    pool: web::Data<PgPool>,
    user_id: UserId,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    if !reference::user_exists(&pool, user_id.0).await? {
        return Err(AppError::Authentication("User no longer exists".to_string()));
    }

    let blog = reference::find_blog_ref(&pool, payload.post_id).await?;
    let author_present = blog.as_ref().map(|b| b.author_exists).unwrap_or(false);
    if !author_present {
        return Err(AppError::NotFound(
            "Blog post no longer exists or author was deleted".to_string(),
        ));
    }

    let comment =
        comment_repo::create_comment(&pool, &payload.content, user_id.0, payload.post_id).await?;

    tracing::info!(
        comment_id = %comment.id,
        blog_id = %comment.blog_id,
        user_id = %user_id.0,
        "Comment created"
    );

    Ok(HttpResponse::Created().json(comment))
}

/// GET /api/comments?post_id=
pub async fn list_comments(
    pool: web::Data<PgPool>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let post_id = query
        .post_id
        .ok_or_else(|| AppError::Validation("post_id is required".to_string()))?;

    let comments = comment_repo::list_comments_for_blog(&pool, post_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}
