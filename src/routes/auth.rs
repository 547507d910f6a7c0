//! Sign-in, registration and logout.

use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::auth::{RegisterForm, SignInForm};
use crate::models::auth::issue_jwt;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::auth as auth_service;
use crate::services::ServiceError;

#[get("/auth/signin")]
pub async fn show_signin(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, None, "signin");
    render_template(&tera, "auth/signin.html", &context)
}

#[post("/auth/signin")]
pub async fn signin(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<SignInForm>,
) -> impl Responder {
    match auth_service::login(repo.get_ref(), &form.username, &form.password) {
        Ok(claims) => match issue_jwt(&claims, &server_config.secret) {
            Ok(token) => match Identity::login(&request.extensions(), token) {
                Ok(_) => redirect("/"),
                Err(err) => {
                    log::error!("Failed to attach the session identity: {err}");
                    FlashMessage::error("Sign-in failed. Try again.").send();
                    redirect("/auth/signin")
                }
            },
            Err(err) => {
                log::error!("Failed to sign the session token: {err}");
                FlashMessage::error("Sign-in failed. Try again.").send();
                redirect("/auth/signin")
            }
        },
        Err(ServiceError::Identity(message)) => {
            FlashMessage::error(message).send();
            redirect("/auth/signin")
        }
        Err(err) => {
            log::error!("Failed to sign in: {err}");
            FlashMessage::error("Sign-in is unavailable right now.").send();
            redirect("/auth/signin")
        }
    }
}

#[get("/auth/register")]
pub async fn show_register(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, None, "register");
    render_template(&tera, "auth/register.html", &context)
}

#[post("/auth/register")]
pub async fn register(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(mut form): web::Form<RegisterForm>,
) -> impl Responder {
    // An untouched email input posts an empty string; treat it as absent.
    form.email = form.email.filter(|email| !email.trim().is_empty());

    match auth_service::register(repo.get_ref(), form) {
        Ok(claims) => match issue_jwt(&claims, &server_config.secret) {
            Ok(token) => match Identity::login(&request.extensions(), token) {
                Ok(_) => redirect("/"),
                Err(err) => {
                    log::error!("Failed to attach the session identity: {err}");
                    FlashMessage::error("Account created, but sign-in failed. Sign in manually.")
                        .send();
                    redirect("/auth/signin")
                }
            },
            Err(err) => {
                log::error!("Failed to sign the session token: {err}");
                FlashMessage::error("Account created, but sign-in failed. Sign in manually.")
                    .send();
                redirect("/auth/signin")
            }
        },
        Err(ServiceError::Validation(message)) | Err(ServiceError::Identity(message)) => {
            FlashMessage::error(message).send();
            redirect("/auth/register")
        }
        Err(err) => {
            log::error!("Failed to register: {err}");
            FlashMessage::error("Registration is unavailable right now.").send();
            redirect("/auth/register")
        }
    }
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/")
}
