use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Role,
    common::entities::app_errors::CoreError,
    jwt::entities::{Jwt, JwtClaim},
};

#[cfg_attr(test, mockall::automock)]
pub trait TokenRepository: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid, role: Role) -> Result<Jwt, CoreError>;

    fn verify_access_token(&self, token: &str) -> Result<JwtClaim, CoreError>;
}
