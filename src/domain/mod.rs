//! Domain aggregates exposed by the service layer.

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod client;
pub mod quote;
pub mod types;
pub mod user;
