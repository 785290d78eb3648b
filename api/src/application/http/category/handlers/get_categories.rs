use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use catalog_core::domain::category::{entities::Category, ports::CategoryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CountMeta {
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCategoriesResponse {
    pub data: Vec<Category>,
    pub meta: CountMeta,
}

#[utoipa::path(
    get,
    path = "",
    tag = "category",
    summary = "List categories",
    description = "Returns every category, newest first.",
    responses(
        (status = 200, body = GetCategoriesResponse)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Response<GetCategoriesResponse>, ApiError> {
    let categories = state
        .service
        .get_categories()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCategoriesResponse {
        meta: CountMeta {
            count: categories.len(),
        },
        data: categories,
    }))
}
