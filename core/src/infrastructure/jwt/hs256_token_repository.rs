use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Role,
    common::entities::app_errors::CoreError,
    jwt::{
        entities::{Jwt, JwtClaim},
        ports::TokenRepository,
    },
};

#[derive(Clone)]
pub struct Hs256TokenRepository {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl Hs256TokenRepository {
    pub fn new(secret: &str, token_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl,
        }
    }
}

impl TokenRepository for Hs256TokenRepository {
    fn generate_access_token(&self, user_id: Uuid, role: Role) -> Result<Jwt, CoreError> {
        let issued_at = Utc::now();
        let ttl = chrono::Duration::from_std(self.token_ttl).map_err(|e| {
            error!("Token lifetime out of range: {}", e);
            CoreError::InternalServerError
        })?;
        let expires_at = issued_at + ttl;

        let claims = JwtClaim::new(user_id, role.to_string(), issued_at, expires_at);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                error!("Failed to sign access token: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Jwt { token, expires_at })
    }

    fn verify_access_token(&self, token: &str) -> Result<JwtClaim, CoreError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<JwtClaim>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                _ => {
                    debug!("Rejected access token: {}", e);
                    CoreError::InvalidToken
                }
            })
    }
}
