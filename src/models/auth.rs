//! JWT encoding/decoding for the identity cookie plus the actix extractor
//! that turns it back into [`AuthenticatedUser`] claims.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest, web};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::domain::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;

/// Session lifetime baked into the `exp` claim.
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24;

/// Signs the claims into the token stored by actix-identity.
pub fn issue_jwt(
    user: &AuthenticatedUser,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        user,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verifies the token signature and expiry, returning the embedded claims.
pub fn decode_jwt(
    token: &str,
    secret: &str,
) -> Result<AuthenticatedUser, jsonwebtoken::errors::Error> {
    decode::<AuthenticatedUser>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = Identity::from_request(req, payload).into_inner();
        let secret = req
            .app_data::<web::Data<ServerConfig>>()
            .map(|config| config.secret.clone());

        ready((|| {
            let identity = identity.map_err(|_| ErrorUnauthorized("not signed in"))?;
            let token = identity.id().map_err(|_| ErrorUnauthorized("not signed in"))?;
            let secret = secret.ok_or_else(|| ErrorUnauthorized("missing configuration"))?;
            decode_jwt(&token, &secret).map_err(|_| ErrorUnauthorized("invalid session"))
        })())
    }
}
