//! Form payloads posted by the quoting screen.
//!
//! Browsers submit every field as text and an untouched `<select>` posts an
//! empty string, so the fields arrive as optional strings and are parsed
//! leniently: anything that is not a usable value is treated as unset.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::quote::QuoteDraft;

fn parse_id(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|s| s.trim().parse::<i32>().ok())
        .filter(|id| *id > 0)
}

/// The event details block: type, date, guest count, package and venue.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteDetailsForm {
    pub event_type_id: Option<String>,
    pub event_date: Option<String>,
    pub guest_count: Option<String>,
    pub package_id: Option<String>,
    pub venue_id: Option<String>,
}

impl QuoteDetailsForm {
    /// Writes the submitted values over the draft. Unparseable fields clear
    /// their slot rather than keep a value the visitor no longer sees.
    pub fn apply_to(&self, draft: &mut QuoteDraft) {
        draft.event_type_id = parse_id(self.event_type_id.as_deref());
        draft.event_date = self
            .event_date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok());
        draft.guest_count = self
            .guest_count
            .as_deref()
            .and_then(|s| s.trim().parse::<i32>().ok())
            .filter(|n| *n > 0);
        draft.package_id = parse_id(self.package_id.as_deref());
        draft.venue_id = parse_id(self.venue_id.as_deref());
    }
}

/// One extra service picked from the product dropdown.
#[derive(Debug, Default, Deserialize)]
pub struct AddExtraLineForm {
    pub product_id: Option<String>,
    pub quantity: Option<String>,
}

impl AddExtraLineForm {
    pub fn parsed(&self) -> (Option<i32>, Option<i32>) {
        (
            parse_id(self.product_id.as_deref()),
            self.quantity
                .as_deref()
                .and_then(|s| s.trim().parse::<i32>().ok()),
        )
    }
}

/// The booking submission carrying its one-shot token.
#[derive(Debug, Deserialize)]
pub struct SubmitQuoteForm {
    pub token: String,
}
