use crate::application::auth::RequiredIdentity;
use crate::application::http::path_params::parse_id;
use crate::application::http::product::handlers::get_product::ProductResponse;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use catalog_core::domain::product::ports::ProductService;

#[utoipa::path(
    delete,
    path = "/{product_id}",
    tag = "product",
    summary = "Delete product",
    description = "Deletes a product and returns it. Requires the admin role.",
    params(
        ("product_id" = uuid::Uuid, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = ProductResponse),
        (status = 404, description = "product not found")
    ),
    security(("bearer" = [])),
)]
pub async fn delete_product(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ProductResponse>, ApiError> {
    let product_id = parse_id(&product_id, "product")?;

    let product = state
        .service
        .delete_product(identity, product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProductResponse { data: product }))
}
