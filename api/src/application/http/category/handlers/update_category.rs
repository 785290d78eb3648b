use crate::application::auth::RequiredIdentity;
use crate::application::http::category::handlers::create_category::CategoryResponse;
use crate::application::http::category::validators::CategoryValidator;
use crate::application::http::path_params::parse_id;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use catalog_core::domain::category::{ports::CategoryService, value_objects::UpdateCategoryInput};

#[utoipa::path(
    put,
    path = "/{category_id}",
    tag = "category",
    summary = "Rename category",
    params(
        ("category_id" = uuid::Uuid, Path, description = "Category ID"),
    ),
    request_body = CategoryValidator,
    responses(
        (status = 200, body = CategoryResponse),
        (status = 404, description = "category not found"),
        (status = 409, description = "category already exists")
    ),
    security(("bearer" = [])),
)]
pub async fn update_category(
    Path(category_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CategoryValidator>,
) -> Result<Response<CategoryResponse>, ApiError> {
    let category_id = parse_id(&category_id, "category")?;

    let category = state
        .service
        .update_category(
            identity,
            UpdateCategoryInput {
                category_id,
                name: payload.name,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CategoryResponse { data: category }))
}
