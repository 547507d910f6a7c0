//! The in-progress quote assembled by a prospective client.
//!
//! A draft lives entirely in the visitor's session; nothing here touches the
//! database. The draft is recomputed against the catalog snapshot after every
//! mutation, so the recommendation and the price estimate never lag behind
//! what the visitor sees.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One extra service added on top of the package/venue selection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtraLine {
    pub product_id: i32,
    pub quantity: i32,
}

/// Best-fit suggestion derived from the guest count and the catalog.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub package_id: Option<i32>,
    pub venue_id: Option<i32>,
}

/// Mutable, unsaved quote. Owned exclusively by one visitor session.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct QuoteDraft {
    pub event_type_id: Option<i32>,
    pub event_date: Option<NaiveDate>,
    pub guest_count: Option<i32>,
    pub package_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub extra_lines: Vec<ExtraLine>,
}

impl QuoteDraft {
    /// Appends an extra line. Requests without a product selection or with a
    /// non-positive quantity are ignored; returns whether the line was added.
    pub fn add_extra_line(&mut self, product_id: Option<i32>, quantity: Option<i32>) -> bool {
        let (Some(product_id), Some(quantity)) = (product_id, quantity) else {
            return false;
        };
        if product_id <= 0 || quantity <= 0 {
            return false;
        }
        self.extra_lines.push(ExtraLine {
            product_id,
            quantity,
        });
        true
    }

    /// Removes the line at `index`, shifting subsequent entries down.
    /// Out-of-range indexes are ignored; returns whether a line was removed.
    pub fn remove_extra_line(&mut self, index: usize) -> bool {
        if index >= self.extra_lines.len() {
            return false;
        }
        self.extra_lines.remove(index);
        true
    }

    /// Overwrites the package/venue selection with the current best fit.
    pub fn apply_recommendation(&mut self, recommendation: &Recommendation) {
        self.package_id = recommendation.package_id;
        self.venue_id = recommendation.venue_id;
    }
}

/// Serialized draft plus its derived total, written to the session right
/// before the visitor is redirected to authenticate and consumed exactly
/// once on the next load of the quoting screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PendingQuoteSnapshot {
    pub draft: QuoteDraft,
    pub estimate: f64,
    pub saved_at: NaiveDateTime,
}
