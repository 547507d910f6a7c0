//! Catalog administration screen.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::settings::{
    AddEventTypeForm, AddPackageForm, AddProductForm, AddVenueForm, ToggleActiveForm,
};
use crate::repository::DieselRepository;
use crate::repository::errors::RepositoryError;
use crate::routes::{base_context, redirect, render_error_page, render_template};
use crate::services::ServiceError;
use crate::services::settings as settings_service;

#[get("/settings")]
pub async fn show_settings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match settings_service::load_settings_page(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "settings");
            context.insert("catalog", &data.catalog);
            render_template(&tera, "settings/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You do not have access to settings.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load settings: {err}");
            let mut context = base_context(&flash_messages, Some(&user), "settings");
            context.insert(
                "message",
                "The catalog is unavailable right now. Please try again in a moment.",
            );
            render_error_page(&tera, &context)
        }
    }
}

fn flash_outcome(result: Result<(), ServiceError>, added: &str) -> HttpResponse {
    match result {
        Ok(()) => {
            FlashMessage::success(format!("{added} added.")).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You do not have access to settings.").send();
            return redirect("/");
        }
        Err(ServiceError::Validation(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a catalog entry: {err}");
            FlashMessage::error(format!("{added} could not be added.")).send();
        }
    }
    redirect("/settings")
}

#[post("/settings/packages/add")]
pub async fn add_package(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddPackageForm>,
) -> impl Responder {
    flash_outcome(
        settings_service::add_package(repo.get_ref(), &user, form),
        "Package",
    )
}

#[post("/settings/venues/add")]
pub async fn add_venue(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddVenueForm>,
) -> impl Responder {
    flash_outcome(
        settings_service::add_venue(repo.get_ref(), &user, form),
        "Venue",
    )
}

#[post("/settings/products/add")]
pub async fn add_product(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddProductForm>,
) -> impl Responder {
    flash_outcome(
        settings_service::add_product(repo.get_ref(), &user, form),
        "Product",
    )
}

#[post("/settings/event-types/add")]
pub async fn add_event_type(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddEventTypeForm>,
) -> impl Responder {
    flash_outcome(
        settings_service::add_event_type(repo.get_ref(), &user, form),
        "Event type",
    )
}

fn flash_toggle(result: Result<(), ServiceError>, entity: &str) -> HttpResponse {
    match result {
        Ok(()) => {
            FlashMessage::success(format!("{entity} updated.")).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You do not have access to settings.").send();
            return redirect("/");
        }
        Err(ServiceError::Repository(RepositoryError::NotFound)) => {
            FlashMessage::error(format!("{entity} no longer exists.")).send();
        }
        Err(err) => {
            log::error!("Failed to toggle a catalog entry: {err}");
            FlashMessage::error(format!("{entity} could not be updated.")).send();
        }
    }
    redirect("/settings")
}

#[post("/settings/packages/{id}/toggle")]
pub async fn toggle_package(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    web::Form(form): web::Form<ToggleActiveForm>,
) -> impl Responder {
    flash_toggle(
        settings_service::set_package_active(repo.get_ref(), &user, path.into_inner(), form.active),
        "Package",
    )
}

#[post("/settings/venues/{id}/toggle")]
pub async fn toggle_venue(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    web::Form(form): web::Form<ToggleActiveForm>,
) -> impl Responder {
    flash_toggle(
        settings_service::set_venue_active(repo.get_ref(), &user, path.into_inner(), form.active),
        "Venue",
    )
}

#[post("/settings/products/{id}/toggle")]
pub async fn toggle_product(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    web::Form(form): web::Form<ToggleActiveForm>,
) -> impl Responder {
    flash_toggle(
        settings_service::set_product_active(repo.get_ref(), &user, path.into_inner(), form.active),
        "Extra",
    )
}

#[post("/settings/event-types/{id}/toggle")]
pub async fn toggle_event_type(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    web::Form(form): web::Form<ToggleActiveForm>,
) -> impl Responder {
    flash_toggle(
        settings_service::set_event_type_active(
            repo.get_ref(),
            &user,
            path.into_inner(),
            form.active,
        ),
        "Event type",
    )
}
