use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("invalid request body")]
    InvalidBody(String),

    #[error("validation error")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    GatewayTimeout(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidBody(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            ApiError::InvalidBody(details) | ApiError::Validation(details) => {
                Some(details.clone())
            }
            _ => None,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        let message = error.to_string();

        match error {
            CoreError::InvalidParameter(_) | CoreError::CategoryReferenceNotFound => {
                ApiError::BadRequest(message)
            }
            // a token whose subject is gone no longer authenticates anyone
            CoreError::InvalidCredentials
            | CoreError::InvalidToken
            | CoreError::TokenExpired
            | CoreError::UserNotFound => ApiError::Unauthorized(message),
            CoreError::Forbidden(_) => ApiError::Forbidden(message),
            CoreError::ProductNotFound | CoreError::CategoryNotFound => ApiError::NotFound(message),
            CoreError::CategoryAlreadyExists
            | CoreError::CategoryInUse
            | CoreError::EmailAlreadyRegistered => ApiError::Conflict(message),
            CoreError::QueryTimeout => ApiError::GatewayTimeout(message),
            CoreError::ServiceUnavailable => ApiError::ServiceUnavailable(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "request failed: {}", self);
        }

        let envelope = ErrorEnvelope {
            error: ErrorBody {
                message: self.to_string(),
                details: self.details(),
            },
        };

        (status, Json(envelope)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::InvalidBody(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status() {
        let cases = [
            (CoreError::InvalidParameter("min_price".into()), StatusCode::BAD_REQUEST),
            (CoreError::CategoryReferenceNotFound, StatusCode::BAD_REQUEST),
            (CoreError::InvalidToken, StatusCode::UNAUTHORIZED),
            (CoreError::TokenExpired, StatusCode::UNAUTHORIZED),
            (CoreError::UserNotFound, StatusCode::UNAUTHORIZED),
            (CoreError::Forbidden("forbidden".into()), StatusCode::FORBIDDEN),
            (CoreError::ProductNotFound, StatusCode::NOT_FOUND),
            (CoreError::CategoryInUse, StatusCode::CONFLICT),
            (CoreError::QueryTimeout, StatusCode::GATEWAY_TIMEOUT),
            (CoreError::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (CoreError::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core).status(), status);
        }
    }

    #[test]
    fn test_messages_are_carried_over() {
        assert_eq!(
            ApiError::from(CoreError::InvalidParameter("category_id".into())),
            ApiError::BadRequest("invalid category_id".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::CategoryReferenceNotFound).to_string(),
            "category_id not found"
        );
    }

    #[test]
    fn test_envelope_omits_absent_details() {
        let body = serde_json::to_value(ErrorEnvelope {
            error: ErrorBody {
                message: "product not found".to_string(),
                details: None,
            },
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({ "error": { "message": "product not found" } })
        );
    }

    #[test]
    fn test_validation_error_keeps_details() {
        let error = ApiError::Validation("name: too short".to_string());
        assert_eq!(error.to_string(), "validation error");
        assert_eq!(error.details(), Some("name: too short".to_string()));
    }
}
