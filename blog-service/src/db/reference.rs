//! Read-only probes into the identity schema via the `users_reference`
//! view. Checked at write time only; reads never consult it.

use sqlx::PgPool;
use uuid::Uuid;

pub async fn user_exists(pool: &PgPool, user_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users_reference WHERE id = $1)",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}
