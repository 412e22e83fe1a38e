pub mod batch;
pub mod course_content;
pub mod interview;
pub mod placement;
pub mod resume;
pub mod student;
pub mod token;
pub mod user;
