//! Error taxonomy exposed by the service layer.
//!
//! Every repository failure is converted at the operation boundary; raw
//! Diesel errors never reach the routes.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input was rejected before any repository call was attempted.
    #[error("{0}")]
    Validation(String),

    /// Authentication, registration or profile creation was rejected. The
    /// identity flow stays in its current state so the user can retry.
    #[error("{0}")]
    Identity(String),

    /// Booking creation failed; nothing was left half-created.
    #[error("booking could not be created: {0}")]
    Conversion(String),

    /// The booking exists but attaching lines or recalculating failed, so
    /// its contents may be incomplete. Reported distinctly so the caller can
    /// tell the user the booking was started.
    #[error("booking {booking_id} was created but may be incomplete: {source}")]
    PartialConversion {
        booking_id: i32,
        source: RepositoryError,
    },

    /// The catalog could not be loaded; the quoting screen cannot render
    /// meaningful recommendations without it.
    #[error("catalog is unavailable: {0}")]
    Catalog(#[source] RepositoryError),

    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
