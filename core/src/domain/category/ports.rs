use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    category::{
        entities::Category,
        value_objects::{CreateCategoryInput, UpdateCategoryInput},
    },
    common::entities::app_errors::CoreError,
};

pub trait CategoryService: Send + Sync {
    fn get_categories(&self) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;

    fn create_category(
        &self,
        identity: Identity,
        input: CreateCategoryInput,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn update_category(
        &self,
        identity: Identity,
        input: UpdateCategoryInput,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn delete_category(
        &self,
        identity: Identity,
        category_id: Uuid,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CategoryRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;

    /// Used before product writes so a dangling reference is reported precisely.
    fn exists(&self, category_id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn create(&self, category: Category)
    -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn update(
        &self,
        category_id: Uuid,
        name: String,
    ) -> impl Future<Output = Result<Option<Category>, CoreError>> + Send;

    fn delete(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<Option<Category>, CoreError>> + Send;
}

pub trait CategoryPolicy: Send + Sync {
    fn can_create_category(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_update_category(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_delete_category(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
