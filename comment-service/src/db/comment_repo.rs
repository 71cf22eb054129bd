use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Comment;

pub async fn create_comment(
    pool: &PgPool,
    content: &str,
    user_id: Uuid,
    blog_id: Uuid,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (content, user_id, blog_id)
        VALUES ($1, $2, $3)
        RETURNING id, content, user_id, blog_id, created_at
        "#,
    )
    .bind(content)
    .bind(user_id)
    .bind(blog_id)
    .fetch_one(pool)
    .await
}

/// All comments on one post, newest first. Listing is not gated on the
/// post still existing; comments may outlive a deleted post.
pub async fn list_comments_for_blog(
    pool: &PgPool,
    blog_id: Uuid,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, user_id, blog_id, created_at
        FROM comments
        WHERE blog_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(blog_id)
    .fetch_all(pool)
    .await
}
