pub mod document;
pub mod embed;
pub mod entities;
pub mod password;
pub mod use_cases;
