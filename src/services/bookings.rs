//! Staff-facing booking listing.

use crate::domain::auth::{AuthenticatedUser, check_role};
use crate::dto::bookings::{BookingsPageData, BookingsQuery};
use crate::pagination::Paginated;
use crate::repository::{BookingListQuery, BookingReader};
use crate::services::{ServiceError, ServiceResult};
use crate::{DEFAULT_ITEMS_PER_PAGE, SERVICE_ADMIN_ROLE};

/// Loads the paginated booking list, optionally narrowed to one event date.
pub fn load_bookings_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: BookingsQuery,
) -> ServiceResult<BookingsPageData>
where
    R: BookingReader + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = query.page.unwrap_or(1);
    let mut list_query = BookingListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(date) = query.event_date {
        list_query = list_query.event_date(date);
    }

    let (total, bookings) = repo.list_bookings(list_query).map_err(|err| {
        log::error!("Failed to list bookings: {err}");
        err
    })?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(BookingsPageData {
        bookings: Paginated::new(bookings, page, total_pages),
        event_date: query.event_date,
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn staff_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            username: "staff".to_string(),
            name: "Staff".to_string(),
            roles: vec![SERVICE_ADMIN_ROLE.to_string()],
            exp: 0,
        }
    }

    fn client_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "2".to_string(),
            username: "ana".to_string(),
            name: "Ana".to_string(),
            roles: vec!["client".to_string()],
            exp: 0,
        }
    }

    #[test]
    fn listing_requires_the_staff_role() {
        let mut repo = MockRepository::new();
        repo.expect_list_bookings().times(0);

        let result = load_bookings_page(&repo, &client_user(), BookingsQuery::default());
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn listing_paginates_with_defaults() {
        let mut repo = MockRepository::new();
        repo.expect_list_bookings()
            .withf(|query| {
                query
                    .pagination
                    .as_ref()
                    .is_some_and(|p| p.page == 1 && p.per_page == DEFAULT_ITEMS_PER_PAGE)
            })
            .times(1)
            .returning(|_| Ok((0, vec![])));

        let page = load_bookings_page(&repo, &staff_user(), BookingsQuery::default())
            .expect("page should load");
        assert!(page.bookings.items.is_empty());
    }
}
