//! Best-fit package and venue selection for a desired guest count.
//!
//! Pure functions of the guest count and the catalog snapshot; callers must
//! re-run them after every mutation that touches the guest count so the
//! suggestion shown on screen never lags behind the draft.

use std::cmp::Ordering;

use crate::domain::catalog::{Capacity, CatalogSnapshot};
use crate::domain::quote::{QuoteDraft, Recommendation};

/// Selects the best-fit package and venue for `guest_count`. Either side is
/// `None` when the guest count is absent/zero or that catalog list is empty.
pub fn recommend(guest_count: Option<i32>, catalog: &CatalogSnapshot) -> Recommendation {
    let guests = match guest_count {
        Some(n) if n > 0 => n,
        _ => return Recommendation::default(),
    };

    Recommendation {
        package_id: best_fit(guests, &catalog.packages).map(|p| p.id),
        venue_id: best_fit(guests, &catalog.venues).map(|v| v.id),
    }
}

/// Turns the displayed best fit into the draft's selection when the visitor
/// saved the details without picking a package or a venue, so the saved
/// draft prices exactly what the screen suggested. An explicit selection on
/// either side is kept as-is. Returns whether the draft changed.
pub fn fill_missing_selection(draft: &mut QuoteDraft, catalog: &CatalogSnapshot) -> bool {
    if draft.package_id.is_some() || draft.venue_id.is_some() {
        return false;
    }

    let recommendation = recommend(draft.guest_count, catalog);
    if recommendation == Recommendation::default() {
        return false;
    }

    draft.apply_recommendation(&recommendation);
    true
}

/// Ranks candidates by ascending distance between the guest count and their
/// effective capacity, tie-broken by ascending price. Candidates whose range
/// covers the guest count are preferred; when none qualifies the whole set
/// is considered, so a non-empty list always yields a winner.
fn best_fit<T: Capacity>(guests: i32, candidates: &[T]) -> Option<&T> {
    let eligible: Vec<&T> = candidates
        .iter()
        .filter(|c| c.accommodates(guests))
        .collect();
    let pool = if eligible.is_empty() {
        candidates.iter().collect::<Vec<&T>>()
    } else {
        eligible
    };

    pool.into_iter().min_by(|a, b| {
        let distance_a = (a.effective_capacity() - guests).abs();
        let distance_b = (b.effective_capacity() - guests).abs();
        distance_a.cmp(&distance_b).then_with(|| {
            a.price()
                .partial_cmp(&b.price())
                .unwrap_or(Ordering::Equal)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Package, Venue};

    fn package(id: i32, min: i32, max: Option<i32>, price: f64) -> Package {
        Package {
            id,
            name: format!("package-{id}"),
            price,
            capacity_min: min,
            capacity_max: max,
            is_active: true,
        }
    }

    fn venue(id: i32, min: i32, max: Option<i32>, price: f64) -> Venue {
        Venue {
            id,
            name: format!("venue-{id}"),
            price,
            capacity_min: min,
            capacity_max: max,
            is_active: true,
        }
    }

    fn catalog_with(packages: Vec<Package>, venues: Vec<Venue>) -> CatalogSnapshot {
        CatalogSnapshot {
            packages,
            venues,
            ..Default::default()
        }
    }

    #[test]
    fn nearest_effective_capacity_wins_among_in_range_candidates() {
        // Both packages cover 60 guests; |80-60| = 20 beats |150-60| = 90.
        let catalog = catalog_with(
            vec![
                package(1, 0, Some(80), 1000.0),
                package(2, 50, Some(150), 1500.0),
            ],
            vec![],
        );

        let rec = recommend(Some(60), &catalog);
        assert_eq!(rec.package_id, Some(1));
    }

    #[test]
    fn falls_back_to_full_set_when_nothing_is_in_range() {
        // No package reaches 200 guests; the closest effective capacity wins.
        let catalog = catalog_with(
            vec![
                package(1, 0, Some(80), 1000.0),
                package(2, 50, Some(150), 1500.0),
            ],
            vec![],
        );

        let rec = recommend(Some(200), &catalog);
        assert_eq!(rec.package_id, Some(2));
    }

    #[test]
    fn in_range_candidate_beats_closer_out_of_range_candidate() {
        // Package 2 has effective capacity 62, closer to 60 than package 1's
        // 80, but it does not cover 60 guests and may not be suggested.
        let catalog = catalog_with(
            vec![
                package(1, 0, Some(80), 5000.0),
                package(2, 61, Some(62), 100.0),
            ],
            vec![],
        );

        let rec = recommend(Some(60), &catalog);
        assert_eq!(rec.package_id, Some(1));
    }

    #[test]
    fn ties_are_broken_by_ascending_price() {
        // Equidistant effective capacities (40 and 80 around 60).
        let catalog = catalog_with(
            vec![
                package(1, 0, Some(40), 900.0),
                package(2, 0, Some(80), 700.0),
            ],
            vec![],
        );

        let rec = recommend(Some(60), &catalog);
        assert_eq!(rec.package_id, Some(2));
    }

    #[test]
    fn unbounded_range_uses_lower_bound_as_effective_capacity() {
        let catalog = catalog_with(
            vec![],
            vec![venue(1, 50, None, 2000.0), venue(2, 100, Some(300), 2500.0)],
        );

        // 120 guests: venue 1 qualifies (unbounded above 50) at distance
        // |50-120| = 70, venue 2 qualifies at |300-120| = 180.
        let rec = recommend(Some(120), &catalog);
        assert_eq!(rec.venue_id, Some(1));
    }

    #[test]
    fn unselected_draft_takes_the_displayed_best_fit() {
        let catalog = catalog_with(
            vec![package(1, 0, Some(80), 1000.0)],
            vec![venue(3, 0, Some(100), 900.0)],
        );
        let mut draft = QuoteDraft {
            guest_count: Some(60),
            ..Default::default()
        };

        assert!(fill_missing_selection(&mut draft, &catalog));
        assert_eq!(draft.package_id, Some(1));
        assert_eq!(draft.venue_id, Some(3));
    }

    #[test]
    fn explicit_selection_survives_the_refresh() {
        let catalog = catalog_with(
            vec![
                package(1, 0, Some(80), 1000.0),
                package(2, 50, Some(150), 1500.0),
            ],
            vec![venue(3, 0, Some(100), 900.0)],
        );
        // The visitor picked the bigger package on purpose.
        let mut draft = QuoteDraft {
            guest_count: Some(60),
            package_id: Some(2),
            ..Default::default()
        };

        assert!(!fill_missing_selection(&mut draft, &catalog));
        assert_eq!(draft.package_id, Some(2));
        assert_eq!(draft.venue_id, None);
    }

    #[test]
    fn no_guest_count_leaves_the_draft_untouched() {
        let catalog = catalog_with(vec![package(1, 0, Some(80), 1000.0)], vec![]);
        let mut draft = QuoteDraft::default();

        assert!(!fill_missing_selection(&mut draft, &catalog));
        assert_eq!(draft, QuoteDraft::default());
    }

    #[test]
    fn missing_guest_count_or_empty_catalog_yields_no_recommendation() {
        let catalog = catalog_with(vec![package(1, 0, Some(80), 1000.0)], vec![]);

        assert_eq!(recommend(None, &catalog), Recommendation::default());
        assert_eq!(recommend(Some(0), &catalog), Recommendation::default());

        let rec = recommend(Some(10), &catalog);
        assert_eq!(rec.package_id, Some(1));
        assert_eq!(rec.venue_id, None);
    }
}
