use crate::application::http::query_extractor::ProductFilterExtractor;
use crate::application::http::query_params::ProductQueryParams;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use catalog_core::domain::product::{entities::Product, ports::ProductService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct PageMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProductsResponse {
    pub data: Vec<Product>,
    pub meta: PageMeta,
}

#[utoipa::path(
    get,
    path = "",
    tag = "product",
    summary = "List products",
    description = "Returns one page of products matching the optional filters, with the total match count.",
    params(ProductQueryParams),
    responses(
        (status = 200, body = GetProductsResponse),
        (status = 400, description = "Malformed category_id, min_price or max_price"),
        (status = 504, description = "Listing exceeded the query deadline")
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    ProductFilterExtractor(filter): ProductFilterExtractor,
) -> Result<Response<GetProductsResponse>, ApiError> {
    let page = state
        .service
        .get_products(filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProductsResponse {
        data: page.items,
        meta: PageMeta {
            page: page.page,
            limit: page.limit,
            total: page.total,
        },
    }))
}
