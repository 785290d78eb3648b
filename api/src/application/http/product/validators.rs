use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn validate_positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_positive() && !price.is_zero() {
        Ok(())
    } else {
        Err(ValidationError::new("price must be greater than 0"))
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductValidator {
    pub category_id: Uuid,

    #[validate(length(min = 2, max = 200, message = "name must be 2 to 200 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    #[validate(custom(function = "validate_positive_price"))]
    pub price: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductValidator {
    pub category_id: Uuid,

    #[validate(length(min = 2, max = 200, message = "name must be 2 to 200 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    #[validate(custom(function = "validate_positive_price"))]
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator(name: &str, price: Decimal) -> CreateProductValidator {
        CreateProductValidator {
            category_id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            price,
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(validator("Linen shirt", Decimal::new(4999, 2)).validate().is_ok());
    }

    #[test]
    fn test_price_must_be_positive() {
        assert!(validator("Linen shirt", Decimal::ZERO).validate().is_err());
        assert!(validator("Linen shirt", Decimal::from(-3)).validate().is_err());
    }

    #[test]
    fn test_name_length() {
        assert!(validator("A", Decimal::ONE).validate().is_err());
        assert!(validator(&"x".repeat(201), Decimal::ONE).validate().is_err());
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let body: CreateProductValidator = serde_json::from_value(serde_json::json!({
            "category_id": Uuid::nil(),
            "name": "Hat",
            "price": 12.5
        }))
        .unwrap();

        assert_eq!(body.description, "");
        assert_eq!(body.price, Decimal::new(125, 1));
    }
}
