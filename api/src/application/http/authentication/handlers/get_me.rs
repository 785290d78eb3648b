use crate::application::auth::RequiredIdentity;
use crate::application::http::authentication::handlers::register::UserResponse;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use catalog_core::domain::authentication::ports::AuthService;

#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    summary = "Current user",
    responses(
        (status = 200, body = UserResponse),
        (status = 401, description = "Missing, invalid or expired token")
    ),
    security(("bearer" = [])),
)]
pub async fn get_me(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<UserResponse>, ApiError> {
    let user = state
        .service
        .get_current_user(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserResponse { data: user }))
}
