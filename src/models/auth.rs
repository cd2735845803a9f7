//! JWT-based identity passed from the gateway to the services behind it.

use std::future::{Ready, ready};

use actix_web::error::ErrorUnauthorized;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Signing secret registered as app data wherever tokens are issued or
/// verified.
#[derive(Clone)]
pub struct AuthSecret(pub String);

/// Claims carried by a bearer token. Extractable from any request that
/// passed through the gateway.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    /// Login of the authenticated principal.
    pub sub: String,
    /// Expiration timestamp in seconds since the epoch.
    pub exp: usize,
}

impl AuthenticatedUser {
    const TTL_SECONDS: i64 = 3600;

    #[must_use]
    pub fn new(sub: impl Into<String>) -> Self {
        let exp = (Utc::now().timestamp() + Self::TTL_SECONDS) as usize;
        Self {
            sub: sub.into(),
            exp,
        }
    }

    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;
        Ok(data.claims)
    }
}

/// Extracts the token from an `Authorization: Bearer` header, if present.
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.app_data::<web::Data<AuthSecret>>() {
            Some(secret) => match bearer_token(req) {
                Some(token) => Self::from_jwt(token, &secret.0)
                    .map_err(|_| ErrorUnauthorized("invalid bearer token")),
                None => Err(ErrorUnauthorized("missing bearer token")),
            },
            None => Err(ErrorUnauthorized("no signing secret configured")),
        };
        ready(result)
    }
}
