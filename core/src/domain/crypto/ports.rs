use crate::domain::common::entities::app_errors::CoreError;

#[cfg_attr(test, mockall::automock)]
pub trait HasherRepository: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, CoreError>;

    /// Returns `Ok(false)` on mismatch; errors are reserved for malformed hashes.
    fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool, CoreError>;
}
