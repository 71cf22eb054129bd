//! Shared authentication primitives for the blog platform services.
//!
//! All three services validate the same session tokens, and the user service
//! additionally issues them and hashes passwords. Keeping both concerns in one
//! crate guarantees every service agrees on the signing algorithm and claim
//! layout.

pub mod jwt;
pub mod password;
