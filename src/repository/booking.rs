//! Diesel implementation of [`BookingReader`] and [`BookingWriter`].

use diesel::prelude::*;

use crate::domain::booking::{Booking, BookingLine, NewBooking, NewBookingLine};
use crate::domain::client::ClientProfile;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{BookingListQuery, BookingReader, BookingWriter, DieselRepository};

impl BookingReader for DieselRepository {
    fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<Booking>> {
        use crate::models::booking::Booking as DbBooking;
        use crate::schema::bookings;

        let mut conn = self.conn()?;
        let booking = bookings::table
            .find(id)
            .first::<DbBooking>(&mut conn)
            .optional()?;

        Ok(booking.map(Into::into))
    }

    fn list_bookings(
        &self,
        query: BookingListQuery,
    ) -> RepositoryResult<(usize, Vec<(Booking, ClientProfile)>)> {
        use crate::models::booking::Booking as DbBooking;
        use crate::models::client::Client as DbClient;
        use crate::schema::{bookings, clients};

        let mut conn = self.conn()?;

        let mut count_query = bookings::table.into_boxed();
        let mut list_query = bookings::table
            .inner_join(clients::table)
            .order(bookings::event_date.asc())
            .into_boxed();

        if let Some(date) = query.event_date {
            count_query = count_query.filter(bookings::event_date.eq(date));
            list_query = list_query.filter(bookings::event_date.eq(date));
        }

        let total: i64 = count_query.count().get_result(&mut conn)?;

        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            list_query = list_query
                .limit(per_page)
                .offset((page - 1) * per_page);
        }

        let rows = list_query.load::<(DbBooking, DbClient)>(&mut conn)?;
        let items = rows
            .into_iter()
            .map(|(booking, client)| (booking.into(), client.into()))
            .collect();

        Ok((total as usize, items))
    }

    fn list_booking_lines(&self, booking_id: i32) -> RepositoryResult<Vec<BookingLine>> {
        use crate::models::booking::BookingLine as DbBookingLine;
        use crate::schema::booking_lines;

        let mut conn = self.conn()?;
        let lines = booking_lines::table
            .filter(booking_lines::booking_id.eq(booking_id))
            .order(booking_lines::id.asc())
            .load::<DbBookingLine>(&mut conn)?;

        Ok(lines.into_iter().map(Into::into).collect())
    }
}

impl BookingWriter for DieselRepository {
    fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking> {
        use crate::models::booking::{Booking as DbBooking, NewBooking as DbNewBooking};
        use crate::schema::bookings;

        let mut conn = self.conn()?;
        let insertable: DbNewBooking = new_booking.into();
        let created = diesel::insert_into(bookings::table)
            .values(&insertable)
            .get_result::<DbBooking>(&mut conn)?;

        Ok(created.into())
    }

    fn attach_booking_line(&self, new_line: &NewBookingLine) -> RepositoryResult<BookingLine> {
        use crate::models::booking::{
            BookingLine as DbBookingLine, NewBookingLine as DbNewBookingLine,
        };
        use crate::schema::booking_lines;

        let mut conn = self.conn()?;
        let insertable: DbNewBookingLine = new_line.into();
        let created = diesel::insert_into(booking_lines::table)
            .values(&insertable)
            .get_result::<DbBookingLine>(&mut conn)?;

        Ok(created.into())
    }

    fn recalculate_booking_total(&self, booking_id: i32) -> RepositoryResult<f64> {
        use crate::models::booking::{Booking as DbBooking, BookingLine as DbBookingLine};
        use crate::schema::{booking_lines, bookings, packages, venues};

        let mut conn = self.conn()?;

        let booking = bookings::table
            .find(booking_id)
            .first::<DbBooking>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        let package_price: f64 = match booking.package_id {
            Some(id) => packages::table
                .find(id)
                .select(packages::price)
                .first::<f64>(&mut conn)
                .optional()?
                .unwrap_or(0.0),
            None => 0.0,
        };
        let venue_price: f64 = match booking.venue_id {
            Some(id) => venues::table
                .find(id)
                .select(venues::price)
                .first::<f64>(&mut conn)
                .optional()?
                .unwrap_or(0.0),
            None => 0.0,
        };

        let lines = booking_lines::table
            .filter(booking_lines::booking_id.eq(booking_id))
            .load::<DbBookingLine>(&mut conn)?;
        let lines_total: f64 = lines
            .iter()
            .map(|line| line.unit_price * f64::from(line.quantity))
            .sum();

        let total = package_price + venue_price + lines_total;
        // Keep already-paid amounts intact when the total changes.
        let paid = booking.total - booking.balance;
        let balance = total - paid;

        diesel::update(bookings::table.find(booking_id))
            .set((bookings::total.eq(total), bookings::balance.eq(balance)))
            .execute(&mut conn)?;

        Ok(total)
    }
}
