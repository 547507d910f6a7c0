use serde::Serialize;

use crate::domain::catalog::CatalogSnapshot;

/// Full catalog, inactive entries included, for the admin screen.
#[derive(Serialize)]
pub struct SettingsPageData {
    pub catalog: CatalogSnapshot,
}
