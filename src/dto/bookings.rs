use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::booking::Booking;
use crate::domain::client::ClientProfile;
use crate::pagination::Paginated;

/// Query-string parameters of the staff booking list.
#[derive(Debug, Default, Deserialize)]
pub struct BookingsQuery {
    pub page: Option<usize>,
    pub event_date: Option<NaiveDate>,
}

/// One page of bookings joined with their owning client profiles.
#[derive(Serialize)]
pub struct BookingsPageData {
    pub bookings: Paginated<(Booking, ClientProfile)>,
    pub event_date: Option<NaiveDate>,
}
