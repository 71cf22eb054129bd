//! Blog repository. Mutations are owner-scoped in SQL so a mismatched
//! owner and a missing row are indistinguishable to the caller.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Blog;

pub async fn create_blog(
    pool: &PgPool,
    title: &str,
    content: &str,
    user_id: Uuid,
) -> Result<Blog, sqlx::Error> {
    sqlx::query_as::<_, Blog>(
        r#"
        INSERT INTO blogs (title, content, user_id)
        VALUES ($1, $2, $3)
        RETURNING id, title, content, user_id, created_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

pub async fn find_blog_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Blog>, sqlx::Error> {
    sqlx::query_as::<_, Blog>(
        "SELECT id, title, content, user_id, created_at FROM blogs WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn count_blogs(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs")
        .fetch_one(pool)
        .await
}

/// Newest-first slice of the listing
pub async fn list_blogs(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Blog>, sqlx::Error> {
    sqlx::query_as::<_, Blog>(
        r#"
        SELECT id, title, content, user_id, created_at
        FROM blogs
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn update_blog(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    title: &str,
    content: &str,
) -> Result<Option<Blog>, sqlx::Error> {
    sqlx::query_as::<_, Blog>(
        r#"
        UPDATE blogs
        SET title = $3, content = $4
        WHERE id = $1 AND user_id = $2
        RETURNING id, title, content, user_id, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(title)
    .bind(content)
    .fetch_optional(pool)
    .await
}

pub async fn delete_blog(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let deleted = sqlx::query_scalar::<_, Uuid>(
        "DELETE FROM blogs WHERE id = $1 AND user_id = $2 RETURNING id",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(deleted.is_some())
}
