//! Staff booking list.

use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::dto::bookings::BookingsQuery;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::bookings as bookings_service;

#[get("/bookings")]
pub async fn show_bookings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    query: web::Query<BookingsQuery>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match bookings_service::load_bookings_page(repo.get_ref(), &user, query.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "bookings");
            context.insert("bookings", &data.bookings);
            context.insert("event_date", &data.event_date);
            render_template(&tera, "bookings/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You do not have access to bookings.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load the booking list: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
