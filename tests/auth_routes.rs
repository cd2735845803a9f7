use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use medilabo::models::config::GatewayConfig;
use medilabo::routes;

mod common;

fn gateway_config() -> GatewayConfig {
    GatewayConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: "templates/**/*.html".to_string(),
        assets_dir: "./assets".to_string(),
        secret: common::SECRET.to_string(),
        auth_username: "user".to_string(),
        auth_password: "pass".to_string(),
        patient_service_url: "http://127.0.0.1:8081".to_string(),
        note_service_url: "http://127.0.0.1:8082".to_string(),
        front_service_url: "http://127.0.0.1:8083".to_string(),
    }
}

macro_rules! gateway_app {
    () => {{
        let secret_key = Key::from(common::SECRET.as_bytes());
        let message_store = CookieMessageStore::builder(secret_key.clone()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();
        let tera = Tera::new("templates/**/*.html").unwrap();

        test::init_service(
            App::new()
                .wrap(message_framework)
                .wrap(IdentityMiddleware::default())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key)
                        .cookie_secure(false)
                        .build(),
                )
                .service(routes::auth::index)
                .service(routes::auth::login_page)
                .service(routes::auth::login)
                .service(routes::auth::logout)
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new(gateway_config())),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_index_redirects_anonymous_visitors_to_login() {
    let app = gateway_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
}

#[actix_web::test]
async fn test_login_page_renders_the_form() {
    let app = gateway_app!();

    let req = test::TestRequest::get().uri("/login").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&bytes);
    assert!(body.contains("action=\"/login\""));
    assert!(body.contains("name=\"username\""));
}

#[actix_web::test]
async fn test_login_rejects_wrong_credentials() {
    let app = gateway_app!();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("username", "user"), ("password", "wrong")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
}

#[actix_web::test]
async fn test_login_establishes_a_session() {
    let app = gateway_app!();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("username", "user"), ("password", "pass")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/front/home");

    let session_cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "id")
        .expect("session cookie")
        .into_owned();

    // A signed-in visitor skips both landing pages.
    let req = test::TestRequest::get()
        .uri("/")
        .cookie(session_cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/front/home");

    let req = test::TestRequest::get()
        .uri("/login")
        .cookie(session_cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/front/home");

    let req = test::TestRequest::post()
        .uri("/logout")
        .cookie(session_cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
}

#[actix_web::test]
async fn test_logout_requires_a_session() {
    let app = gateway_app!();

    let req = test::TestRequest::post().uri("/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
