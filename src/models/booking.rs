//! Diesel models for the `bookings` and `booking_lines` tables.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::booking::{
    Booking as DomainBooking, BookingLine as DomainBookingLine, BookingStatus,
    NewBooking as DomainNewBooking, NewBookingLine as DomainNewBookingLine,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::bookings)]
/// Diesel model for [`crate::domain::booking::Booking`].
pub struct Booking {
    pub id: i32,
    pub reference: String,
    pub client_id: i32,
    pub event_type_id: Option<i32>,
    pub event_date: NaiveDate,
    pub guest_count: i32,
    pub package_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub status: String,
    pub total: f64,
    pub balance: f64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::bookings)]
/// Insertable form of [`Booking`].
pub struct NewBooking<'a> {
    pub reference: &'a str,
    pub client_id: i32,
    pub event_type_id: Option<i32>,
    pub event_date: NaiveDate,
    pub guest_count: i32,
    pub package_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub status: String,
    pub total: f64,
    pub balance: f64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(table_name = crate::schema::booking_lines)]
#[diesel(belongs_to(Booking, foreign_key = booking_id))]
/// Diesel model for [`crate::domain::booking::BookingLine`].
pub struct BookingLine {
    pub id: i32,
    pub booking_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::booking_lines)]
/// Insertable form of [`BookingLine`].
pub struct NewBookingLine {
    pub booking_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
}

impl From<Booking> for DomainBooking {
    fn from(row: Booking) -> Self {
        Self {
            id: row.id,
            reference: row.reference,
            client_id: row.client_id,
            event_type_id: row.event_type_id,
            event_date: row.event_date,
            guest_count: row.guest_count,
            package_id: row.package_id,
            venue_id: row.venue_id,
            // Unknown status text is treated as a quotation rather than
            // failing the whole listing.
            status: row.status.parse().unwrap_or_default(),
            total: row.total,
            balance: row.balance,
            created_at: row.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewBooking> for NewBooking<'a> {
    fn from(new: &'a DomainNewBooking) -> Self {
        Self {
            reference: new.reference.as_str(),
            client_id: new.client_id,
            event_type_id: new.event_type_id,
            event_date: new.event_date,
            guest_count: new.guest_count,
            package_id: new.package_id,
            venue_id: new.venue_id,
            status: new.status.to_string(),
            total: new.total,
            balance: new.balance,
            created_at: new.created_at,
        }
    }
}

impl From<BookingLine> for DomainBookingLine {
    fn from(row: BookingLine) -> Self {
        Self {
            id: row.id,
            booking_id: row.booking_id,
            product_id: row.product_id,
            quantity: row.quantity,
            unit_price: row.unit_price,
        }
    }
}

impl From<&DomainNewBookingLine> for NewBookingLine {
    fn from(new: &DomainNewBookingLine) -> Self {
        Self {
            booking_id: new.booking_id,
            product_id: new.product_id,
            quantity: new.quantity,
            unit_price: new.unit_price,
        }
    }
}
