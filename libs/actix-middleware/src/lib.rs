//! Actix middleware shared by every service that sits behind bearer-token
//! authentication.

mod jwt_auth;

pub use jwt_auth::{JwtAuthMiddleware, UserId};
