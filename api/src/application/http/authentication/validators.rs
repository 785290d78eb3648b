use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Emails are compared lower-cased and trimmed, so they are stored that way too.
fn normalized_email<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let email = String::deserialize(deserializer)?;
    Ok(email.trim().to_lowercase())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterValidator {
    #[validate(length(min = 2, max = 50, message = "name must be 2 to 50 characters"))]
    pub name: String,

    #[serde(deserialize_with = "normalized_email")]
    #[validate(email(message = "email is invalid"), length(max = 255))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "password must be 8 to 72 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[serde(deserialize_with = "normalized_email")]
    #[validate(email(message = "email is invalid"), length(max = 255))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_normalized_before_validation() {
        let body: RegisterValidator = serde_json::from_value(serde_json::json!({
            "name": "Jane",
            "email": "  Jane@Example.COM ",
            "password": "correct horse"
        }))
        .unwrap();

        assert_eq!(body.email, "jane@example.com");
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_short_password_is_rejected() {
        let body = RegisterValidator {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_login_requires_valid_email() {
        let body = LoginValidator {
            email: "not-an-email".to_string(),
            password: "whatever1".to_string(),
        };
        assert!(body.validate().is_err());
    }
}
