mod user;

pub use user::{LoginResponse, User, UserResponse};
