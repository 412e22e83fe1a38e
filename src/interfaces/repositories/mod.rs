pub mod batch;
pub mod content;
pub mod interview;
pub mod placement;
pub mod sqlx_repo;
pub mod student;
pub mod token;
pub mod user;
