pub mod comment_repo;
pub mod reference;
