//! User service
//!
//! Owns identity: registration, login with token issuance, and CRUD on
//! user profiles. Other services never call back into this one; they
//! observe the `users` table through read-only reference views.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

pub use config::Config;
pub use error::{AppError, Result};
