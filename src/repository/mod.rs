//! Repository traits abstracting the durable store from the service layer,
//! plus the Diesel implementation used by the running application.

use chrono::NaiveDate;

use crate::db::{DbConnection, DbPool};
use crate::domain::booking::{Booking, BookingLine, NewBooking, NewBookingLine};
use crate::domain::catalog::{
    CatalogSnapshot, EventType, NewEventType, NewPackage, NewProduct, NewVenue, Package, Product,
    Venue,
};
use crate::domain::client::{ClientProfile, NewClientProfile};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::repository::errors::RepositoryResult;

pub mod booking;
pub mod catalog;
pub mod client;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod user;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct BookingListQuery {
    pub event_date: Option<NaiveDate>,
    pub pagination: Option<Pagination>,
}

impl BookingListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_date(mut self, date: NaiveDate) -> Self {
        self.event_date = Some(date);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait CatalogReader {
    fn list_packages(&self, active_only: bool) -> RepositoryResult<Vec<Package>>;
    fn list_venues(&self, active_only: bool) -> RepositoryResult<Vec<Venue>>;
    fn list_products(&self, active_only: bool) -> RepositoryResult<Vec<Product>>;
    fn list_event_types(&self, active_only: bool) -> RepositoryResult<Vec<EventType>>;

    /// Fetches the four catalog lists in one snapshot.
    fn load_catalog(&self, active_only: bool) -> RepositoryResult<CatalogSnapshot> {
        Ok(CatalogSnapshot {
            packages: self.list_packages(active_only)?,
            venues: self.list_venues(active_only)?,
            products: self.list_products(active_only)?,
            event_types: self.list_event_types(active_only)?,
        })
    }
}

pub trait CatalogWriter {
    fn create_package(&self, new_package: &NewPackage) -> RepositoryResult<Package>;
    fn create_venue(&self, new_venue: &NewVenue) -> RepositoryResult<Venue>;
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn create_event_type(&self, new_event_type: &NewEventType) -> RepositoryResult<EventType>;
    /// Entries are never deleted; deactivation hides them from the public
    /// catalog while existing bookings keep referencing them.
    fn set_package_active(&self, id: i32, active: bool) -> RepositoryResult<()>;
    fn set_venue_active(&self, id: i32, active: bool) -> RepositoryResult<()>;
    fn set_product_active(&self, id: i32, active: bool) -> RepositoryResult<()>;
    fn set_event_type_active(&self, id: i32, active: bool) -> RepositoryResult<()>;
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<ClientProfile>>;
    /// Profile lookup for the signed-in user; `None` means the account has
    /// no client profile yet, which is an expected state, not an error.
    fn get_client_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<ClientProfile>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClientProfile) -> RepositoryResult<ClientProfile>;
}

pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<()>;
}

pub trait BookingReader {
    fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<Booking>>;
    fn list_bookings(
        &self,
        query: BookingListQuery,
    ) -> RepositoryResult<(usize, Vec<(Booking, ClientProfile)>)>;
    fn list_booking_lines(&self, booking_id: i32) -> RepositoryResult<Vec<BookingLine>>;
}

pub trait BookingWriter {
    fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking>;
    fn attach_booking_line(&self, new_line: &NewBookingLine) -> RepositoryResult<BookingLine>;
    /// Recomputes the booking total from its selections and attached lines,
    /// updating the stored total and outstanding balance.
    fn recalculate_booking_total(&self, booking_id: i32) -> RepositoryResult<f64>;
}

/// Diesel implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}
