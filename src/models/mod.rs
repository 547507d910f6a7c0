//! Database models shared across the repository layer.

#[cfg(feature = "server")]
pub mod auth;
pub mod booking;
pub mod catalog;
pub mod client;
#[cfg(feature = "server")]
pub mod config;
pub mod user;
