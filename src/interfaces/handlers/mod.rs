pub mod auth;
pub mod batches;
pub mod contents;
pub mod interviews;
pub mod placements;
pub mod resumes;
pub mod students;
pub mod system;
