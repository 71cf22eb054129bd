pub mod blog_repo;
pub mod reference;
