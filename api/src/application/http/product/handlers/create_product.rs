use crate::application::auth::RequiredIdentity;
use crate::application::http::product::handlers::get_product::ProductResponse;
use crate::application::http::product::validators::CreateProductValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use catalog_core::domain::product::{ports::ProductService, value_objects::CreateProductInput};

#[utoipa::path(
    post,
    path = "",
    tag = "product",
    summary = "Create product",
    description = "Creates a product in an existing category. Requires the admin role.",
    request_body = CreateProductValidator,
    responses(
        (status = 201, body = ProductResponse),
        (status = 400, description = "Invalid body or category_id not found"),
        (status = 403, description = "forbidden")
    ),
    security(("bearer" = [])),
)]
pub async fn create_product(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateProductValidator>,
) -> Result<Response<ProductResponse>, ApiError> {
    let product = state
        .service
        .create_product(
            identity,
            CreateProductInput {
                category_id: payload.category_id,
                name: payload.name,
                description: payload.description,
                price: payload.price,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ProductResponse { data: product }))
}
