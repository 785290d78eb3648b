use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CategoryValidator {
    #[validate(length(min = 2, max = 50, message = "name must be 2 to 50 characters"))]
    pub name: String,
}
