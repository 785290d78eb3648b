use crate::application::auth::RequiredIdentity;
use crate::application::http::category::validators::CategoryValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use catalog_core::domain::category::{
    entities::Category, ports::CategoryService, value_objects::CreateCategoryInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryResponse {
    pub data: Category,
}

#[utoipa::path(
    post,
    path = "",
    tag = "category",
    summary = "Create category",
    request_body = CategoryValidator,
    responses(
        (status = 201, body = CategoryResponse),
        (status = 409, description = "category already exists")
    ),
    security(("bearer" = [])),
)]
pub async fn create_category(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CategoryValidator>,
) -> Result<Response<CategoryResponse>, ApiError> {
    let category = state
        .service
        .create_category(identity, CreateCategoryInput { name: payload.name })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CategoryResponse { data: category }))
}
