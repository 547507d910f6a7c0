//! HTTP handlers plus the small helpers shared between them.

use actix_session::Session;
use actix_web::http::header;
use actix_web::{HttpResponse, Responder};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::domain::auth::AuthenticatedUser;
use crate::services::quote::SessionSlot;

pub mod auth;
pub mod bookings;
pub mod main;
pub mod profile;
pub mod settings;

/// 303 redirect to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Renders `template_name` or logs and answers 500 when rendering fails.
pub fn render_template(tera: &Tera, template_name: &str, context: &Context) -> HttpResponse {
    match tera.render(template_name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {template_name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Full error page shown when a failure blocks rendering the requested
/// screen, answered as 503 so the visitor retries. Falls back to a bare 500
/// when even the error template cannot render.
pub fn render_error_page(tera: &Tera, context: &Context) -> HttpResponse {
    match tera.render("error.html", context) {
        Ok(body) => HttpResponse::ServiceUnavailable()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render the error page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context shared by every page: flash alerts, the signed-in user (if any)
/// and the active navigation entry.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&AuthenticatedUser>,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user);
    context.insert("current_page", current_page);
    context
}

/// The cookie session is the per-visitor slot the quote draft lives in.
/// Values that fail to extract read as absent; write failures only log,
/// the response is already on its way.
impl SessionSlot for Session {
    fn read(&self, key: &str) -> Option<String> {
        self.get::<String>(key).ok().flatten()
    }

    fn write(&self, key: &str, value: String) {
        if let Err(err) = self.insert(key, value) {
            log::error!("Failed to write session key {key}: {err}");
        }
    }

    fn delete(&self, key: &str) {
        self.remove(key);
    }
}

/// Catch-all for anything outside the routing table.
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().finish()
}
