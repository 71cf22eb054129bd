use actix_middleware::UserId;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::PaginationConfig;
use crate::db::{blog_repo, reference};
use crate::error::{AppError, Result};
use crate::models::BlogPage;
use crate::pagination;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// POST /api/blogs
///
/// The token may outlive its account, so the author is re-checked
/// against the identity schema on every write.
pub async fn create_blog(
    pool: web::Data<PgPool>,
    user_id: UserId,
    payload: web::Json<CreateBlogRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    if !reference::user_exists(&pool, user_id.0).await? {
        return Err(AppError::Authentication("User no longer exists".to_string()));
    }

    let blog = blog_repo::create_blog(&pool, &payload.title, &payload.content, user_id.0).await?;

    tracing::info!(blog_id = %blog.id, user_id = %user_id.0, "Blog post created");

    Ok(HttpResponse::Created().json(blog))
}

/// GET /api/blogs
pub async fn list_blogs(
    pool: web::Data<PgPool>,
    pagination_config: web::Data<PaginationConfig>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let current_page = pagination::normalize_page(query.page);
    let limit = pagination::clamp_limit(
        query.limit,
        pagination_config.default_limit,
        pagination_config.max_limit,
    );
    let offset = pagination::offset(current_page, limit);

    let item_count = blog_repo::count_blogs(&pool).await?;
    let blogs = blog_repo::list_blogs(&pool, limit, offset).await?;

    let page_count = pagination::page_count(item_count, limit);

    Ok(HttpResponse::Ok().json(BlogPage {
        blogs,
        page_count,
        item_count,
        pages: pagination::page_links(page_count, current_page, limit),
        current_page,
        has_next_page: pagination::has_next_page(current_page, page_count),
    }))
}

/// GET /api/blogs/{id}
pub async fn get_blog(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let id = path.into_inner();

    let blog = blog_repo::find_blog_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

    Ok(HttpResponse::Ok().json(blog))
}

/// PUT /api/blogs/{id}
///
/// Ownership is enforced inside the UPDATE predicate; the response
/// does not distinguish a missing post from someone else's post.
pub async fn update_blog(
    pool: web::Data<PgPool>,
    user_id: UserId,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateBlogRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;
    let id = path.into_inner();

    let blog = blog_repo::update_blog(&pool, id, user_id.0, &payload.title, &payload.content)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("Blog post not found or unauthorized".to_string())
        })?;

    tracing::info!(blog_id = %blog.id, user_id = %user_id.0, "Blog post updated");

    Ok(HttpResponse::Ok().json(blog))
}

/// DELETE /api/blogs/{id}
pub async fn delete_blog(
    pool: web::Data<PgPool>,
    user_id: UserId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    if !blog_repo::delete_blog(&pool, id, user_id.0).await? {
        return Err(AppError::NotFound(
            "Blog post not found or unauthorized".to_string(),
        ));
    }

    tracing::info!(blog_id = %id, user_id = %user_id.0, "Blog post deleted");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Blog post deleted successfully"
    })))
}
