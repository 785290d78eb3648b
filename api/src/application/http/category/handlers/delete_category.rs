use crate::application::auth::RequiredIdentity;
use crate::application::http::category::handlers::create_category::CategoryResponse;
use crate::application::http::path_params::parse_id;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use catalog_core::domain::category::ports::CategoryService;

#[utoipa::path(
    delete,
    path = "/{category_id}",
    tag = "category",
    summary = "Delete category",
    description = "Deletes a category that no product references and returns it.",
    params(
        ("category_id" = uuid::Uuid, Path, description = "Category ID"),
    ),
    responses(
        (status = 200, body = CategoryResponse),
        (status = 404, description = "category not found"),
        (status = 409, description = "category is used by products")
    ),
    security(("bearer" = [])),
)]
pub async fn delete_category(
    Path(category_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<CategoryResponse>, ApiError> {
    let category_id = parse_id(&category_id, "category")?;

    let category = state
        .service
        .delete_category(identity, category_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CategoryResponse { data: category }))
}
