use crate::application::http::path_params::parse_id;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use catalog_core::domain::product::{entities::Product, ports::ProductService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductResponse {
    pub data: Product,
}

#[utoipa::path(
    get,
    path = "/{product_id}",
    tag = "product",
    summary = "Get product",
    params(
        ("product_id" = uuid::Uuid, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = ProductResponse),
        (status = 404, description = "product not found")
    ),
)]
pub async fn get_product(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<ProductResponse>, ApiError> {
    let product_id = parse_id(&product_id, "product")?;

    let product = state
        .service
        .get_product(product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProductResponse { data: product }))
}
