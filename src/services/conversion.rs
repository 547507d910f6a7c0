//! Conversion of a finalized quote draft into persisted booking records.
//!
//! Three strictly sequential repository operations: create the booking,
//! attach the extra lines in draft order, trigger the total recalculation.
//! Lines and recalculation only run once booking creation has yielded an
//! id. A failure after that point is reported as a partial conversion; the
//! booking exists and nothing is rolled back or retried automatically.

use chrono::Utc;

use crate::domain::booking::{Booking, BookingStatus, NewBooking, NewBookingLine};
use crate::domain::quote::QuoteDraft;
use crate::domain::types::PublicId;
use crate::repository::{BookingWriter, CatalogReader};
use crate::services::{ServiceError, ServiceResult};

/// Converts the draft into a booking owned by the resolved client. Returns
/// the created booking on full success.
pub fn convert<R>(
    repo: &R,
    draft: &QuoteDraft,
    estimate: f64,
    client_id: i32,
) -> ServiceResult<Booking>
where
    R: BookingWriter + CatalogReader + ?Sized,
{
    let guest_count = draft
        .guest_count
        .filter(|n| *n > 0)
        .ok_or_else(|| ServiceError::Validation("A guest count is required".to_string()))?;
    let event_date = draft
        .event_date
        .ok_or_else(|| ServiceError::Validation("An event date is required".to_string()))?;
    if draft.package_id.is_none() && draft.venue_id.is_none() {
        return Err(ServiceError::Validation(
            "Choose a package or a venue before booking".to_string(),
        ));
    }

    let new_booking = NewBooking {
        reference: PublicId::new().to_string(),
        client_id,
        event_type_id: draft.event_type_id,
        event_date,
        guest_count,
        package_id: draft.package_id,
        venue_id: draft.venue_id,
        status: BookingStatus::Quotation,
        total: estimate,
        balance: estimate,
        created_at: Utc::now().naive_utc(),
    };

    let booking = repo.create_booking(&new_booking).map_err(|err| {
        log::error!("Failed to create booking: {err}");
        ServiceError::Conversion(err.to_string())
    })?;

    // Capture unit prices at conversion time; the catalog may have been
    // refreshed since the lines were added. Inactive products still price
    // correctly, hence the unfiltered listing.
    let products = repo.list_products(false).map_err(|err| {
        log::error!("Failed to load products while attaching lines: {err}");
        ServiceError::PartialConversion {
            booking_id: booking.id,
            source: err,
        }
    })?;

    for line in &draft.extra_lines {
        let unit_price = products
            .iter()
            .find(|p| p.id == line.product_id)
            .map(|p| if p.price.is_finite() { p.price } else { 0.0 })
            .unwrap_or(0.0);

        repo.attach_booking_line(&NewBookingLine {
            booking_id: booking.id,
            product_id: line.product_id,
            quantity: line.quantity,
            unit_price,
        })
        .map_err(|err| {
            log::error!("Failed to attach booking line: {err}");
            ServiceError::PartialConversion {
                booking_id: booking.id,
                source: err,
            }
        })?;
    }

    repo.recalculate_booking_total(booking.id).map_err(|err| {
        log::error!("Failed to recalculate booking total: {err}");
        ServiceError::PartialConversion {
            booking_id: booking.id,
            source: err,
        }
    })?;

    Ok(booking)
}
