use crate::application::http::authentication::validators::RegisterValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use catalog_core::domain::{
    authentication::{entities::RegisterInput, ports::AuthService},
    user::entities::User,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserResponse {
    pub data: User,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Register",
    description = "Creates an account with the `user` role.",
    request_body = RegisterValidator,
    responses(
        (status = 201, body = UserResponse),
        (status = 409, description = "email already registered")
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<UserResponse>, ApiError> {
    let user = state
        .service
        .register(RegisterInput {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(UserResponse { data: user }))
}
