//! Blog service
//!
//! CRUD for blog posts with paginated listing. Writes are gated on the
//! author still existing in the identity schema, observed through the
//! read-only `users_reference` view.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;

pub use config::Config;
pub use error::{AppError, Result};
