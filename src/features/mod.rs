pub mod admin;
pub mod auth;
pub mod export;
pub mod preferences;
pub mod reports;
