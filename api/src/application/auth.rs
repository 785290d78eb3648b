use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use catalog_core::domain::authentication::{
    entities::AuthorizeRequestInput, ports::AuthService, value_objects::Identity,
};

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized("missing authorization header".to_string()))?;

    Ok(bearer.token().to_string())
}

/// Identity of the caller, verified from the `Authorization: Bearer` header.
///
/// Handlers pass the inner [`Identity`] explicitly to the service calls that
/// need it.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token_from_bearer(parts).await?;
        let app_state = AppState::from_ref(state);

        let output = app_state
            .service
            .authorize_request(AuthorizeRequestInput { token })
            .await
            .map_err(ApiError::from)?;

        Ok(RequiredIdentity(output.identity))
    }
}
