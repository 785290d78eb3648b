use crate::domain::{
    authentication::value_objects::{Identity, Role},
    category::ports::CategoryPolicy,
    common::{entities::app_errors::CoreError, policies::CatalogPolicy},
};

impl CategoryPolicy for CatalogPolicy {
    async fn can_create_category(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(self.has_role(identity, Role::Admin))
    }

    async fn can_update_category(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(self.has_role(identity, Role::Admin))
    }

    async fn can_delete_category(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(self.has_role(identity, Role::Admin))
    }
}
