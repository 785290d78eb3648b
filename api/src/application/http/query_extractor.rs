use axum::{extract::FromRequestParts, http::request::Parts};

use super::{query_params::ProductQueryParams, server::api_entities::api_error::ApiError};
use catalog_core::domain::product::value_objects::ProductFilter;

/// Extracts a validated [`ProductFilter`] from the request query string.
///
/// Usage:
/// ```ignore
/// async fn handler(
///     ProductFilterExtractor(filter): ProductFilterExtractor,
/// ) -> Result<Response<GetProductsResponse>, ApiError> {
///     // filter.page, filter.limit, filter.category_id, ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ProductFilterExtractor(pub ProductFilter);

impl<S> FromRequestParts<S> for ProductFilterExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
            .map_err(|_| ApiError::BadRequest("invalid query string".to_string()))?;

        let filter = ProductQueryParams::from_pairs(pairs)
            .into_filter()
            .map_err(ApiError::from)?;

        Ok(ProductFilterExtractor(filter))
    }
}
