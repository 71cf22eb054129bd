mod auth;
mod health;
mod users;

pub use auth::{login, register};
pub use health::health;
pub use users::{delete_user, get_user, update_user};
