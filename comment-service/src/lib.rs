//! Comment service
//!
//! Creates and lists comments on blog posts. A comment is accepted
//! only while its author exists and the target post's author still
//! exists, both checked through read-only reference views.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

pub use config::Config;
pub use error::{AppError, Result};
