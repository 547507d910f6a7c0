pub mod auth;
pub mod profile;
pub mod quote;
pub mod settings;
