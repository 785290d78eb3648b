use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid {0}")]
    InvalidParameter(String),

    #[error("category_id not found")]
    CategoryReferenceNotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("category not found")]
    CategoryNotFound,

    #[error("category already exists")]
    CategoryAlreadyExists,

    #[error("category is used by products")]
    CategoryInUse,

    #[error("email already registered")]
    EmailAlreadyRegistered,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid token")]
    InvalidToken,

    #[error("token expired")]
    TokenExpired,

    #[error("{0}")]
    Forbidden(String),

    #[error("query timed out")]
    QueryTimeout,

    #[error("database unavailable")]
    ServiceUnavailable,

    #[error("internal server error")]
    InternalServerError,
}
