//! Read-only probes into sibling services' schemas via the
//! `users_reference` and `blogs_reference` views.

use sqlx::PgPool;
use uuid::Uuid;

/// Target post as seen through the reference view, with the presence
/// of its author resolved in the same query.
#[derive(Debug, sqlx::FromRow)]
pub struct BlogRef {
    pub id: Uuid,
    pub user_id: Uuid,
    pub author_exists: bool,
}

pub async fn user_exists(pool: &PgPool, user_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users_reference WHERE id = $1)",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// None when the post itself is gone; `author_exists` distinguishes a
/// live post whose author was deleted. Callers report both conditions
/// to the client identically.
pub async fn find_blog_ref(pool: &PgPool, blog_id: Uuid) -> Result<Option<BlogRef>, sqlx::Error> {
    sqlx::query_as::<_, BlogRef>(
        r#"
        SELECT b.id, b.user_id,
               EXISTS(SELECT 1 FROM users_reference u WHERE u.id = b.user_id) AS author_exists
        FROM blogs_reference b
        WHERE b.id = $1
        "#,
    )
    .bind(blog_id)
    .fetch_optional(pool)
    .await
}
