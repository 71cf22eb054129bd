use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::pagination::PageLink;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// One page of the blog listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPage {
    pub blogs: Vec<Blog>,
    pub page_count: i64,
    pub item_count: i64,
    pub pages: Vec<PageLink>,
    pub current_page: i64,
    pub has_next_page: bool,
}
