//! Contact-profile completion for signed-in accounts without a client record.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::profile::CompleteProfileForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::identity as identity_service;

#[get("/profile")]
pub async fn show_profile(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, Some(&user), "profile");
    render_template(&tera, "profile/index.html", &context)
}

#[post("/profile")]
pub async fn save_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<CompleteProfileForm>,
) -> impl Responder {
    let Some(user_id) = user.user_id() else {
        log::error!("Session claims hold a non-numeric subject: {}", user.sub);
        return HttpResponse::Unauthorized().finish();
    };

    match identity_service::complete_profile(repo.get_ref(), user_id, form) {
        Ok(_) => {
            FlashMessage::success("Contact details saved. You can finish your booking now.")
                .send();
            redirect("/")
        }
        Err(ServiceError::Validation(message)) => {
            FlashMessage::error(message).send();
            redirect("/profile")
        }
        Err(err) => {
            log::error!("Failed to save the client profile: {err}");
            FlashMessage::error("Your details could not be saved. Try again.").send();
            redirect("/profile")
        }
    }
}
