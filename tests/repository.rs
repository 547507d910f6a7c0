use chrono::{NaiveDate, Utc};
use festiplan::domain::booking::{BookingStatus, NewBooking, NewBookingLine};
use festiplan::domain::catalog::{NewEventType, NewPackage, NewProduct, NewVenue};
use festiplan::domain::client::NewClientProfile;
use festiplan::domain::user::{NewUser, UpdateUser};
use festiplan::repository::{
    BookingListQuery, BookingReader, BookingWriter, CatalogReader, CatalogWriter, ClientReader,
    ClientWriter, DieselRepository, UserReader, UserWriter,
};

mod common;

fn client_fixture(repo: &DieselRepository, username: &str) -> i32 {
    let user = repo
        .create_user(&NewUser::new(
            username.to_string(),
            "salt$digest".to_string(),
            "Ana".to_string(),
            None,
            vec!["client".to_string()],
        ))
        .unwrap();
    let profile = NewClientProfile::new(
        user.id,
        "Ana Pérez".to_string(),
        "+34 612 345 678".to_string(),
        "12345678Z".to_string(),
    )
    .unwrap();
    repo.create_client(&profile).unwrap().id
}

fn new_booking(client_id: i32, date: NaiveDate, package_id: Option<i32>) -> NewBooking {
    NewBooking {
        reference: format!("ref-{client_id}-{date}"),
        client_id,
        event_type_id: None,
        event_date: date,
        guest_count: 60,
        package_id,
        venue_id: None,
        status: BookingStatus::Quotation,
        total: 0.0,
        balance: 0.0,
        created_at: Utc::now().naive_utc(),
    }
}

#[test]
fn test_catalog_repository_lists_and_filters() {
    let test_db = common::TestDb::new("test_catalog_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let package = repo
        .create_package(&NewPackage {
            name: "banquet".to_string(),
            price: 1500.0,
            capacity_min: 0,
            capacity_max: Some(80),
        })
        .unwrap();
    repo.create_venue(&NewVenue {
        name: "garden".to_string(),
        price: 900.0,
        capacity_min: 30,
        capacity_max: None,
    })
    .unwrap();
    repo.create_product(&NewProduct {
        name: "dj".to_string(),
        price: 500.0,
    })
    .unwrap();
    repo.create_event_type(&NewEventType {
        name: "wedding".to_string(),
    })
    .unwrap();

    assert!(package.is_active);

    let snapshot = repo.load_catalog(true).unwrap();
    assert_eq!(snapshot.packages.len(), 1);
    assert_eq!(snapshot.venues.len(), 1);
    assert_eq!(snapshot.products.len(), 1);
    assert_eq!(snapshot.event_types.len(), 1);
    assert_eq!(snapshot.packages[0].capacity_max, Some(80));
    assert_eq!(snapshot.venues[0].capacity_max, None);
}

#[test]
fn test_catalog_deactivation_hides_entries_from_the_public_snapshot() {
    let test_db = common::TestDb::new("test_catalog_deactivation.db");
    let repo = DieselRepository::new(test_db.pool());

    let package = repo
        .create_package(&NewPackage {
            name: "banquet".to_string(),
            price: 1500.0,
            capacity_min: 0,
            capacity_max: Some(80),
        })
        .unwrap();

    repo.set_package_active(package.id, false).unwrap();

    // Hidden from visitors, still present on the admin screen.
    assert!(repo.load_catalog(true).unwrap().packages.is_empty());
    let admin_view = repo.load_catalog(false).unwrap();
    assert_eq!(admin_view.packages.len(), 1);
    assert!(!admin_view.packages[0].is_active);

    repo.set_package_active(package.id, true).unwrap();
    assert_eq!(repo.load_catalog(true).unwrap().packages.len(), 1);

    assert!(matches!(
        repo.set_package_active(999, false),
        Err(festiplan::repository::errors::RepositoryError::NotFound)
    ));
}

#[test]
fn test_user_and_client_repository() {
    let test_db = common::TestDb::new("test_user_client_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let user = repo
        .create_user(&NewUser::new(
            "  Ana  ".to_string(),
            "salt$digest".to_string(),
            "Ana".to_string(),
            Some("Ana@Example.com".to_string()),
            vec!["client".to_string()],
        ))
        .unwrap();
    assert_eq!(user.username, "ana");
    assert_eq!(user.email.as_deref(), Some("ana@example.com"));
    assert_eq!(user.roles, vec!["client".to_string()]);

    let by_username = repo.get_user_by_username("ana").unwrap().unwrap();
    assert_eq!(by_username.id, user.id);
    assert!(repo.get_user_by_username("nobody").unwrap().is_none());

    repo.update_user(
        user.id,
        &UpdateUser {
            name: Some("Ana Pérez".to_string()),
            email: None,
        },
    )
    .unwrap();
    let updated = repo.get_user_by_id(user.id).unwrap().unwrap();
    assert_eq!(updated.name, "Ana Pérez");

    // No profile yet.
    assert!(repo.get_client_by_user_id(user.id).unwrap().is_none());

    let profile = repo
        .create_client(
            &NewClientProfile::new(
                user.id,
                "Ana Pérez".to_string(),
                "+34 612 345 678".to_string(),
                "12345678Z".to_string(),
            )
            .unwrap(),
        )
        .unwrap();
    assert_eq!(profile.phone, "+34612345678");

    let found = repo.get_client_by_user_id(user.id).unwrap().unwrap();
    assert_eq!(found.id, profile.id);
    assert_eq!(repo.get_client_by_id(profile.id).unwrap().unwrap().id, profile.id);
}

#[test]
fn test_booking_repository_create_and_list() {
    let test_db = common::TestDb::new("test_booking_repository.db");
    let repo = DieselRepository::new(test_db.pool());
    let client_id = client_fixture(&repo, "ana");

    let june = NaiveDate::from_ymd_opt(2026, 6, 20).unwrap();
    let july = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
    let first = repo.create_booking(&new_booking(client_id, june, None)).unwrap();
    repo.create_booking(&new_booking(client_id, july, None)).unwrap();

    assert_eq!(first.status, BookingStatus::Quotation);
    assert_eq!(
        repo.get_booking_by_id(first.id).unwrap().unwrap().reference,
        first.reference
    );

    let (total, rows) = repo.list_bookings(BookingListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(rows.len(), 2);
    // Ordered by event date, joined with the owning profile.
    assert_eq!(rows[0].0.event_date, june);
    assert_eq!(rows[0].1.phone, "+34612345678");

    let (filtered_total, filtered) = repo
        .list_bookings(BookingListQuery::new().event_date(june))
        .unwrap();
    assert_eq!(filtered_total, 1);
    assert_eq!(filtered[0].0.id, first.id);

    let (paged_total, paged) = repo
        .list_bookings(BookingListQuery::new().paginate(1, 1))
        .unwrap();
    assert_eq!(paged_total, 2);
    assert_eq!(paged.len(), 1);
}

#[test]
fn test_booking_total_recalculation() {
    let test_db = common::TestDb::new("test_booking_recalculation.db");
    let repo = DieselRepository::new(test_db.pool());
    let client_id = client_fixture(&repo, "ana");

    let package = repo
        .create_package(&NewPackage {
            name: "banquet".to_string(),
            price: 1500.0,
            capacity_min: 0,
            capacity_max: Some(80),
        })
        .unwrap();
    let product = repo
        .create_product(&NewProduct {
            name: "dj".to_string(),
            price: 500.0,
        })
        .unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 6, 20).unwrap();
    let booking = repo
        .create_booking(&new_booking(client_id, date, Some(package.id)))
        .unwrap();

    repo.attach_booking_line(&NewBookingLine {
        booking_id: booking.id,
        product_id: product.id,
        quantity: 2,
        unit_price: 500.0,
    })
    .unwrap();

    let total = repo.recalculate_booking_total(booking.id).unwrap();
    assert_eq!(total, 2500.0);

    let stored = repo.get_booking_by_id(booking.id).unwrap().unwrap();
    assert_eq!(stored.total, 2500.0);
    assert_eq!(stored.balance, 2500.0);

    let lines = repo.list_booking_lines(booking.id).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].unit_price, 500.0);
}

#[test]
fn test_attached_line_keeps_its_captured_price() {
    let test_db = common::TestDb::new("test_line_price_capture.db");
    let repo = DieselRepository::new(test_db.pool());
    let client_id = client_fixture(&repo, "ana");

    let product = repo
        .create_product(&NewProduct {
            name: "chairs".to_string(),
            price: 10.0,
        })
        .unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 6, 20).unwrap();
    let booking = repo.create_booking(&new_booking(client_id, date, None)).unwrap();

    // The line price was captured at conversion time, not read back from
    // the product row.
    repo.attach_booking_line(&NewBookingLine {
        booking_id: booking.id,
        product_id: product.id,
        quantity: 3,
        unit_price: 8.0,
    })
    .unwrap();

    let total = repo.recalculate_booking_total(booking.id).unwrap();
    assert_eq!(total, 24.0);
}
