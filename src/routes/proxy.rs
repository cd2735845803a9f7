//! Reverse proxy that fronts the patient, note and front services.
//!
//! Every request entering the gateway is authenticated here, either by the
//! browser session established on the login page or by a bearer token, and
//! then replayed against the owning service with a freshly issued service
//! token attached.

use actix_identity::Identity;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::models::auth::{AuthenticatedUser, bearer_token};
use crate::models::config::GatewayConfig;
use crate::services::ServiceError;

/// Request headers copied verbatim to the upstream service.
const FORWARDED_REQUEST_HEADERS: [&str; 3] = ["Accept", "Content-Type", "Cookie"];
/// Response headers copied verbatim back to the caller.
const FORWARDED_RESPONSE_HEADERS: [&str; 3] = ["Content-Type", "Location", "Set-Cookie"];

/// Resolves the upstream base URL owning a request path.
fn resolve_target<'a>(path: &str, config: &'a GatewayConfig) -> Option<&'a str> {
    if path == "/front" || path.starts_with("/front/") {
        Some(&config.front_service_url)
    } else if path == "/patients" || path.starts_with("/patients/") {
        Some(&config.patient_service_url)
    } else if path == "/notes" || path.starts_with("/notes/") {
        Some(&config.note_service_url)
    } else {
        None
    }
}

/// Determines who is making the request: a browser session established by
/// the login form, or an API caller presenting a bearer token.
fn authenticated_principal(
    req: &HttpRequest,
    user: Option<Identity>,
    secret: &str,
) -> Result<String, ServiceError> {
    if let Some(user) = user {
        return user.id().map_err(|e| {
            ServiceError::Internal(format!("Failed to read the session identity: {e}"))
        });
    }
    let token = bearer_token(req).ok_or(ServiceError::Unauthorized)?;
    let claims =
        AuthenticatedUser::from_jwt(token, secret).map_err(|_| ServiceError::Unauthorized)?;
    Ok(claims.sub)
}

pub async fn forward(
    req: HttpRequest,
    body: web::Bytes,
    user: Option<Identity>,
    client: web::Data<reqwest::Client>,
    config: web::Data<GatewayConfig>,
) -> Result<HttpResponse, ServiceError> {
    let principal = authenticated_principal(&req, user, &config.secret)?;

    let path = req.path();
    let target = resolve_target(path, &config)
        .ok_or_else(|| ServiceError::Internal(format!("No upstream configured for {path}")))?;

    let token = AuthenticatedUser::new(principal)
        .to_jwt(&config.secret)
        .map_err(|e| ServiceError::Internal(format!("Failed to issue a service token: {e}")))?;

    let path_and_query = req.uri().path_and_query().map_or(path, |pq| pq.as_str());
    let url = format!("{target}{path_and_query}");

    // actix and reqwest disagree on the `http` crate major version, so
    // headers cross the boundary as strings.
    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|_| ServiceError::BadRequest("Unsupported method".to_string()))?;

    let mut upstream = client.request(method, &url).bearer_auth(token);
    for header in FORWARDED_REQUEST_HEADERS {
        if let Some(value) = req.headers().get(header).and_then(|v| v.to_str().ok()) {
            upstream = upstream.header(header, value);
        }
    }
    if !body.is_empty() {
        upstream = upstream.body(body.to_vec());
    }

    log::debug!("forwarding {} {} to {}", req.method(), path, url);

    let response = upstream
        .send()
        .await
        .map_err(|e| ServiceError::Internal(format!("Upstream request failed: {e}")))?;

    let status = StatusCode::from_u16(response.status().as_u16())
        .map_err(|e| ServiceError::Internal(format!("Upstream status was invalid: {e}")))?;

    let mut builder = HttpResponse::build(status);
    for header in FORWARDED_RESPONSE_HEADERS {
        for value in response.headers().get_all(header) {
            if let Ok(value) = value.to_str() {
                builder.append_header((header, value));
            }
        }
    }

    let bytes = response.bytes().await.map_err(|e| {
        ServiceError::Internal(format!("Failed to read the upstream response: {e}"))
    })?;

    Ok(builder.body(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GatewayConfig {
        GatewayConfig {
            address: "127.0.0.1".to_string(),
            port: 8080,
            templates_dir: "templates/**/*.html".to_string(),
            assets_dir: "assets".to_string(),
            secret: "0123456789012345678901234567890123456789012345678901234567890123".to_string(),
            auth_username: "user".to_string(),
            auth_password: "password".to_string(),
            patient_service_url: "http://patients.local".to_string(),
            note_service_url: "http://notes.local".to_string(),
            front_service_url: "http://front.local".to_string(),
        }
    }

    #[test]
    fn front_paths_resolve_to_the_front_service() {
        let config = config();
        assert_eq!(
            resolve_target("/front", &config),
            Some("http://front.local")
        );
        assert_eq!(
            resolve_target("/front/home", &config),
            Some("http://front.local")
        );
    }

    #[test]
    fn api_paths_resolve_to_their_services() {
        let config = config();
        assert_eq!(
            resolve_target("/patients/4", &config),
            Some("http://patients.local")
        );
        assert_eq!(
            resolve_target("/notes/patient/4", &config),
            Some("http://notes.local")
        );
    }

    #[test]
    fn unknown_paths_have_no_upstream() {
        let config = config();
        assert_eq!(resolve_target("/frontier", &config), None);
        assert_eq!(resolve_target("/admin", &config), None);
    }

    #[test]
    fn bearer_callers_are_identified_without_a_session() {
        let config = config();
        let token = AuthenticatedUser::new("front-service")
            .to_jwt(&config.secret)
            .unwrap();
        let req = actix_web::test::TestRequest::default()
            .insert_header((
                actix_web::http::header::AUTHORIZATION,
                format!("Bearer {token}"),
            ))
            .to_http_request();

        let principal = authenticated_principal(&req, None, &config.secret).unwrap();
        assert_eq!(principal, "front-service");
    }

    #[test]
    fn anonymous_requests_are_rejected() {
        let config = config();
        let req = actix_web::test::TestRequest::default().to_http_request();

        let result = authenticated_principal(&req, None, &config.secret);
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }
}
