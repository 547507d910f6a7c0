//! Booking records produced by converting a quote draft, plus the extra
//! service lines attached to them.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Freshly converted quote, not yet confirmed by staff.
    #[default]
    Quotation,
    Confirmed,
    Cancelled,
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookingStatus::Quotation => "quotation",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        };
        write!(f, "{label}")
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quotation" => Ok(BookingStatus::Quotation),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(format!("unknown booking status: {other}")),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: i32,
    /// Random public reference shown to clients instead of the row id.
    pub reference: String,
    pub client_id: i32,
    pub event_type_id: Option<i32>,
    pub event_date: NaiveDate,
    pub guest_count: i32,
    pub package_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub status: BookingStatus,
    pub total: f64,
    pub balance: f64,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewBooking {
    pub reference: String,
    pub client_id: i32,
    pub event_type_id: Option<i32>,
    pub event_date: NaiveDate,
    pub guest_count: i32,
    pub package_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub status: BookingStatus,
    pub total: f64,
    pub balance: f64,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BookingLine {
    pub id: i32,
    pub booking_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    /// Unit price captured at conversion time, not at add-time.
    pub unit_price: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewBookingLine {
    pub booking_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            BookingStatus::Quotation,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(status.to_string().parse::<BookingStatus>(), Ok(status));
        }
        assert!("draft".parse::<BookingStatus>().is_err());
    }
}
