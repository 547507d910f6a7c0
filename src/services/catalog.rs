//! Catalog snapshot acquisition for the quoting screen.

use crate::domain::catalog::CatalogSnapshot;
use crate::repository::CatalogReader;
use crate::services::{ServiceError, ServiceResult};

/// Fetches the active catalog lists once per quoting-screen entry. A load
/// failure is blocking: without the catalog the screen would render wrong
/// recommendations, so the caller shows an error instead.
pub fn load_catalog<R>(repo: &R) -> ServiceResult<CatalogSnapshot>
where
    R: CatalogReader + ?Sized,
{
    repo.load_catalog(true).map_err(|err| {
        log::error!("Failed to load catalog snapshot: {err}");
        ServiceError::Catalog(err)
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    #[test]
    fn load_failure_is_reported_as_blocking_catalog_error() {
        let mut repo = MockRepository::new();
        repo.expect_list_packages()
            .returning(|_| Err(RepositoryError::ConnectionError("down".to_string())));

        assert!(matches!(
            load_catalog(&repo),
            Err(ServiceError::Catalog(_))
        ));
    }

    #[test]
    fn snapshot_combines_all_four_lists() {
        let mut repo = MockRepository::new();
        repo.expect_list_packages().returning(|_| Ok(vec![]));
        repo.expect_list_venues().returning(|_| Ok(vec![]));
        repo.expect_list_products().returning(|_| Ok(vec![]));
        repo.expect_list_event_types().returning(|_| Ok(vec![]));

        let snapshot = load_catalog(&repo).expect("snapshot");
        assert_eq!(snapshot, CatalogSnapshot::default());
    }
}
