//! Price estimation for the quote draft currently on screen.

use crate::domain::catalog::CatalogSnapshot;
use crate::domain::quote::QuoteDraft;

/// Sums the selected package, the selected venue and every extra line at its
/// catalog price. Unset selections, stale product references and non-finite
/// prices all contribute zero; this function never fails.
pub fn estimate_total(draft: &QuoteDraft, catalog: &CatalogSnapshot) -> f64 {
    let package_price = draft
        .package_id
        .and_then(|id| catalog.package(id))
        .map(|p| finite_or_zero(p.price))
        .unwrap_or(0.0);
    let venue_price = draft
        .venue_id
        .and_then(|id| catalog.venue(id))
        .map(|v| finite_or_zero(v.price))
        .unwrap_or(0.0);
    let extras_total: f64 = draft
        .extra_lines
        .iter()
        .map(|line| {
            let unit_price = catalog
                .product(line.product_id)
                .map(|p| finite_or_zero(p.price))
                .unwrap_or(0.0);
            unit_price * f64::from(line.quantity)
        })
        .sum();

    package_price + venue_price + extras_total
}

fn finite_or_zero(price: f64) -> f64 {
    if price.is_finite() { price } else { 0.0 }
}
