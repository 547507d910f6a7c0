use serde::Serialize;

use crate::domain::catalog::CatalogSnapshot;
use crate::domain::quote::{QuoteDraft, Recommendation};

/// Everything the quoting screen renders: the catalog lists, the visitor's
/// draft, the derived best fit and total, and the one-shot submit token.
#[derive(Serialize)]
pub struct QuotePageData {
    pub catalog: CatalogSnapshot,
    pub draft: QuoteDraft,
    pub recommendation: Recommendation,
    pub estimate: f64,
    pub submit_token: String,
}
