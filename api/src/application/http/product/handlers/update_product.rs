use crate::application::auth::RequiredIdentity;
use crate::application::http::path_params::parse_id;
use crate::application::http::product::handlers::get_product::ProductResponse;
use crate::application::http::product::validators::UpdateProductValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use catalog_core::domain::product::{ports::ProductService, value_objects::UpdateProductInput};

#[utoipa::path(
    put,
    path = "/{product_id}",
    tag = "product",
    summary = "Update product",
    description = "Replaces every editable field of a product. Requires the admin role.",
    params(
        ("product_id" = uuid::Uuid, Path, description = "Product ID"),
    ),
    request_body = UpdateProductValidator,
    responses(
        (status = 200, body = ProductResponse),
        (status = 400, description = "Invalid body or category_id not found"),
        (status = 404, description = "product not found")
    ),
    security(("bearer" = [])),
)]
pub async fn update_product(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateProductValidator>,
) -> Result<Response<ProductResponse>, ApiError> {
    let product_id = parse_id(&product_id, "product")?;

    let product = state
        .service
        .update_product(
            identity,
            UpdateProductInput {
                product_id,
                category_id: payload.category_id,
                name: payload.name,
                description: payload.description,
                price: payload.price,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProductResponse { data: product }))
}
