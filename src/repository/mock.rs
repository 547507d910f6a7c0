//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::booking::{Booking, BookingLine, NewBooking, NewBookingLine};
use crate::domain::catalog::{
    EventType, NewEventType, NewPackage, NewProduct, NewVenue, Package, Product, Venue,
};
use crate::domain::client::{ClientProfile, NewClientProfile};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BookingListQuery, BookingReader, BookingWriter, CatalogReader, CatalogWriter, ClientReader,
    ClientWriter, UserReader, UserWriter,
};

mock! {
    pub Repository {}

    impl CatalogReader for Repository {
        fn list_packages(&self, active_only: bool) -> RepositoryResult<Vec<Package>>;
        fn list_venues(&self, active_only: bool) -> RepositoryResult<Vec<Venue>>;
        fn list_products(&self, active_only: bool) -> RepositoryResult<Vec<Product>>;
        fn list_event_types(&self, active_only: bool) -> RepositoryResult<Vec<EventType>>;
    }

    impl CatalogWriter for Repository {
        fn create_package(&self, new_package: &NewPackage) -> RepositoryResult<Package>;
        fn create_venue(&self, new_venue: &NewVenue) -> RepositoryResult<Venue>;
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn create_event_type(&self, new_event_type: &NewEventType) -> RepositoryResult<EventType>;
        fn set_package_active(&self, id: i32, active: bool) -> RepositoryResult<()>;
        fn set_venue_active(&self, id: i32, active: bool) -> RepositoryResult<()>;
        fn set_product_active(&self, id: i32, active: bool) -> RepositoryResult<()>;
        fn set_event_type_active(&self, id: i32, active: bool) -> RepositoryResult<()>;
    }

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<ClientProfile>>;
        fn get_client_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<ClientProfile>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClientProfile) -> RepositoryResult<ClientProfile>;
    }

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn update_user(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<()>;
    }

    impl BookingReader for Repository {
        fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<Booking>>;
        fn list_bookings(
            &self,
            query: BookingListQuery,
        ) -> RepositoryResult<(usize, Vec<(Booking, ClientProfile)>)>;
        fn list_booking_lines(&self, booking_id: i32) -> RepositoryResult<Vec<BookingLine>>;
    }

    impl BookingWriter for Repository {
        fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking>;
        fn attach_booking_line(&self, new_line: &NewBookingLine) -> RepositoryResult<BookingLine>;
        fn recalculate_booking_total(&self, booking_id: i32) -> RepositoryResult<f64>;
    }
}
