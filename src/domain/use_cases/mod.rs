pub mod auth;
pub mod extractors;
pub mod resume_export;
