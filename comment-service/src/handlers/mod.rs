mod comments;
mod health;

pub use comments::{create_comment, list_comments};
pub use health::health;
