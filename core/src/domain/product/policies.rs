use crate::domain::{
    authentication::value_objects::{Identity, Role},
    common::{entities::app_errors::CoreError, policies::CatalogPolicy},
    product::ports::ProductPolicy,
};

impl ProductPolicy for CatalogPolicy {
    async fn can_create_product(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(self.has_role(identity, Role::Admin))
    }

    async fn can_update_product(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(self.has_role(identity, Role::Admin))
    }

    async fn can_delete_product(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(self.has_role(identity, Role::Admin))
    }
}
