//! The anonymous quoting screen and its mutations.
//!
//! Every mutation stores the draft back into the session and redirects to
//! `GET /`, so the recommendation and the estimate are recomputed from the
//! catalog on each render and never go stale.

use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Utc;
use tera::{Context, Tera};

use crate::domain::auth::AuthenticatedUser;
use crate::dto::quote::QuotePageData;
use crate::forms::quote::{AddExtraLineForm, QuoteDetailsForm, SubmitQuoteForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_error_page, render_template};
use crate::services::quote::{
    consume_submit_token, issue_submit_token, load_draft, stash_pending, store_draft, take_pending,
    DRAFT_KEY, SessionSlot,
};
use crate::services::{
    ServiceError, catalog as catalog_service, conversion as conversion_service,
    identity as identity_service, pricing, recommendation as recommendation_service,
};

#[get("/")]
pub async fn show_index(
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let catalog = match catalog_service::load_catalog(repo.get_ref()) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Quoting screen unavailable: {err}");
            let mut context = base_context(&flash_messages, user.as_ref(), "index");
            context.insert(
                "message",
                "The catalog is unavailable right now. Please try again in a moment.",
            );
            return render_error_page(&tera, &context);
        }
    };

    // A snapshot stashed before the sign-in redirect takes priority over
    // whatever draft was in the session, and is consumed on this read.
    let draft = match take_pending(&session) {
        Some(snapshot) => {
            store_draft(&session, &snapshot.draft);
            FlashMessage::info("Your quote was restored. Review it and book again.").send();
            snapshot.draft
        }
        None => load_draft(&session),
    };

    let recommendation = recommendation_service::recommend(draft.guest_count, &catalog);
    let data = QuotePageData {
        estimate: pricing::estimate_total(&draft, &catalog),
        submit_token: issue_submit_token(&session),
        catalog,
        draft,
        recommendation,
    };

    let mut context = base_context(&flash_messages, user.as_ref(), "index");
    match Context::from_serialize(&data) {
        Ok(page) => context.extend(page),
        Err(err) => {
            log::error!("Failed to build the quoting context: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    render_template(&tera, "main/index.html", &context)
}

#[post("/quote/details")]
pub async fn save_details(
    repo: web::Data<DieselRepository>,
    session: Session,
    web::Form(form): web::Form<QuoteDetailsForm>,
) -> impl Responder {
    let mut draft = load_draft(&session);
    form.apply_to(&mut draft);
    // A submission without a package/venue choice adopts the best fit the
    // screen was showing; otherwise the draft would price at zero while the
    // visitor sees a suggestion.
    match catalog_service::load_catalog(repo.get_ref()) {
        Ok(catalog) => {
            recommendation_service::fill_missing_selection(&mut draft, &catalog);
        }
        Err(err) => log::error!("Skipping the best-fit refresh: {err}"),
    }
    store_draft(&session, &draft);
    redirect("/")
}

#[post("/quote/extras/add")]
pub async fn add_extra(
    session: Session,
    web::Form(form): web::Form<AddExtraLineForm>,
) -> impl Responder {
    let mut draft = load_draft(&session);
    let (product_id, quantity) = form.parsed();
    // An incomplete line is ignored without an error, same as the screen.
    if draft.add_extra_line(product_id, quantity) {
        store_draft(&session, &draft);
    }
    redirect("/")
}

#[post("/quote/extras/remove/{index}")]
pub async fn remove_extra(session: Session, index: web::Path<usize>) -> impl Responder {
    let mut draft = load_draft(&session);
    if draft.remove_extra_line(index.into_inner()) {
        store_draft(&session, &draft);
    }
    redirect("/")
}

#[post("/quote/submit")]
pub async fn submit_quote(
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    session: Session,
    web::Form(form): web::Form<SubmitQuoteForm>,
) -> impl Responder {
    if !consume_submit_token(&session, &form.token) {
        FlashMessage::warning("This request was already processed. Review your quote.").send();
        return redirect("/");
    }

    let draft = load_draft(&session);
    let catalog = match catalog_service::load_catalog(repo.get_ref()) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Cannot price the quote for submission: {err}");
            FlashMessage::error("Booking is unavailable right now. Try again later.").send();
            return redirect("/");
        }
    };
    let estimate = pricing::estimate_total(&draft, &catalog);

    let identity = match identity_service::resolve(repo.get_ref(), user.as_ref()) {
        Ok(identity) => identity,
        Err(err) => {
            log::error!("Failed to resolve the booking identity: {err}");
            FlashMessage::error("Booking is unavailable right now. Try again later.").send();
            return redirect("/");
        }
    };

    let client_id = match identity {
        identity_service::IdentityState::Anonymous => {
            stash_pending(&session, &draft, estimate, Utc::now().naive_utc());
            FlashMessage::info("Sign in to finish your booking. Your quote is saved.").send();
            return redirect("/auth/signin");
        }
        identity_service::IdentityState::NeedsProfile { .. } => {
            stash_pending(&session, &draft, estimate, Utc::now().naive_utc());
            FlashMessage::info("Complete your contact details to finish the booking.").send();
            return redirect("/profile");
        }
        identity_service::IdentityState::Resolved { client_id } => client_id,
    };

    match conversion_service::convert(repo.get_ref(), &draft, estimate, client_id) {
        Ok(booking) => {
            session.delete(DRAFT_KEY);
            FlashMessage::success(format!(
                "Booking {} created. We will contact you to confirm.",
                booking.reference
            ))
            .send();
            redirect("/")
        }
        Err(ServiceError::Validation(message)) => {
            FlashMessage::error(message).send();
            redirect("/")
        }
        Err(ServiceError::PartialConversion { booking_id, source }) => {
            log::error!("Booking {booking_id} converted partially: {source}");
            session.delete(DRAFT_KEY);
            FlashMessage::warning(
                "Your booking was registered but needs a manual review. We will contact you.",
            )
            .send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to convert the quote: {err}");
            FlashMessage::error("Booking failed. Your quote is still here, try again.").send();
            redirect("/")
        }
    }
}
