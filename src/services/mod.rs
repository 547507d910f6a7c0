pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod conversion;
pub mod errors;
pub mod identity;
pub mod pricing;
pub mod quote;
pub mod recommendation;
pub mod settings;

pub use errors::{ServiceError, ServiceResult};
