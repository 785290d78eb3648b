use std::future::Future;

use crate::domain::{
    authentication::{
        entities::{
            AccessToken, AuthorizeRequestInput, AuthorizeRequestOutput, LoginInput, RegisterInput,
        },
        value_objects::Identity,
    },
    common::entities::app_errors::CoreError,
    user::entities::User,
};

pub trait AuthService: Send + Sync {
    fn register(&self, input: RegisterInput) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn login(&self, input: LoginInput)
    -> impl Future<Output = Result<AccessToken, CoreError>> + Send;

    /// Verifies a bearer token and returns the principal it was issued to.
    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<AuthorizeRequestOutput, CoreError>> + Send;

    fn get_current_user(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}
