use actix_web::http::{StatusCode, header};
use actix_web_flash_messages::Level;
use tera::{Context, Tera};

use festiplan::routes::{alert_level_to_str, redirect, render_error_page};

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[test]
fn test_redirect_sets_location() {
    let resp = redirect("/bookings");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/bookings");
}

#[test]
fn test_error_page_answers_service_unavailable() {
    let tera = Tera::new("templates/**/*.html").expect("templates should parse");
    let mut context = Context::new();
    context.insert("alerts", &Vec::<(String, String)>::new());
    context.insert("current_user", &Option::<String>::None);
    context.insert("current_page", "index");
    context.insert("message", "The catalog is unavailable right now.");

    let resp = render_error_page(&tera, &context);
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
