use uuid::Uuid;

use super::server::api_entities::api_error::ApiError;

/// Parses a path segment as a UUID, failing with `invalid {resource} id`.
pub fn parse_id(raw: &str, resource: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::BadRequest(format!("invalid {resource} id")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "product"), Ok(id));
        assert_eq!(
            parse_id("42", "product"),
            Err(ApiError::BadRequest("invalid product id".to_string()))
        );
    }
}
