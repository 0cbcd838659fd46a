pub mod accounts;
pub mod auth;
pub mod courses;
pub mod purchases;
