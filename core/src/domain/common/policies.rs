use crate::domain::{
    authentication::value_objects::{Identity, Role},
    common::entities::app_errors::CoreError,
};

/// Role based policy shared by every catalog resource.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogPolicy;

impl CatalogPolicy {
    pub fn new() -> Self {
        Self
    }

    pub fn has_role(&self, identity: &Identity, role: Role) -> bool {
        identity.role == role
    }
}

pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match result_has_permission {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_policy_denied_is_forbidden() {
        let result = ensure_policy(Ok(false), "forbidden");
        assert_eq!(result, Err(CoreError::Forbidden("forbidden".to_string())));
    }

    #[test]
    fn test_ensure_policy_propagates_errors() {
        let result = ensure_policy(Err(CoreError::InternalServerError), "forbidden");
        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[test]
    fn test_ensure_policy_granted() {
        assert!(ensure_policy(Ok(true), "forbidden").is_ok());
    }
}
