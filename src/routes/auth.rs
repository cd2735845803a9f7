//! Login and logout pages of the gateway.

use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::auth::LoginForm;
use crate::models::config::GatewayConfig;
use crate::routes::{base_context, redirect, render_template};
use crate::services;

#[get("/")]
pub async fn index(user: Option<Identity>) -> impl Responder {
    if user.is_some() {
        redirect("/front/home")
    } else {
        redirect("/login")
    }
}

#[get("/login")]
pub async fn login_page(
    user: Option<Identity>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_some() {
        return redirect("/front/home");
    }
    let context = base_context(&flash_messages, None);
    render_template(&tera, "login.html", &context)
}

#[post("/login")]
pub async fn login(
    request: HttpRequest,
    web::Form(form): web::Form<LoginForm>,
    config: web::Data<GatewayConfig>,
) -> impl Responder {
    if !services::auth::verify_credentials(&config, &form.username, &form.password) {
        FlashMessage::error("Invalid username or password.").send();
        return redirect("/login");
    }

    match Identity::login(&request.extensions(), form.username) {
        Ok(_) => redirect("/front/home"),
        Err(e) => {
            log::error!("Failed to establish a session: {e}");
            FlashMessage::error("Failed to establish a session.").send();
            redirect("/login")
        }
    }
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/login")
}
