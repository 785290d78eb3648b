use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    category::{
        entities::Category,
        ports::{CategoryPolicy, CategoryRepository, CategoryService},
        value_objects::{CreateCategoryInput, UpdateCategoryInput},
    },
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenRepository,
    product::ports::ProductRepository,
    user::ports::UserRepository,
};

impl<C, P, U, H, T, HC> CategoryService for Service<C, P, U, H, T, HC>
where
    C: CategoryRepository,
    P: ProductRepository,
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
    HC: HealthCheckRepository,
{
    async fn get_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.category_repository.list().await
    }

    async fn create_category(
        &self,
        identity: Identity,
        input: CreateCategoryInput,
    ) -> Result<Category, CoreError> {
        ensure_policy(
            self.policy.can_create_category(&identity).await,
            "forbidden",
        )?;

        self.category_repository
            .create(Category::new(input.name))
            .await
    }

    async fn update_category(
        &self,
        identity: Identity,
        input: UpdateCategoryInput,
    ) -> Result<Category, CoreError> {
        ensure_policy(
            self.policy.can_update_category(&identity).await,
            "forbidden",
        )?;

        self.category_repository
            .update(input.category_id, input.name)
            .await?
            .ok_or(CoreError::CategoryNotFound)
    }

    async fn delete_category(
        &self,
        identity: Identity,
        category_id: Uuid,
    ) -> Result<Category, CoreError> {
        ensure_policy(
            self.policy.can_delete_category(&identity).await,
            "forbidden",
        )?;

        self.category_repository
            .delete(category_id)
            .await?
            .ok_or(CoreError::CategoryNotFound)
    }
}
