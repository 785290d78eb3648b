use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    product::{
        entities::Product,
        query::ProductQuery,
        value_objects::{CreateProductInput, ProductFilter, ProductPage, UpdateProductInput},
    },
};

pub trait ProductService: Send + Sync {
    fn get_products(
        &self,
        filter: ProductFilter,
    ) -> impl Future<Output = Result<ProductPage, CoreError>> + Send;

    fn get_product(
        &self,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn create_product(
        &self,
        identity: Identity,
        input: CreateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn update_product(
        &self,
        identity: Identity,
        input: UpdateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete_product(
        &self,
        identity: Identity,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Runs the count and page queries of `query`, returning the page items and
    /// the total number of matching rows.
    fn list_products(
        &self,
        query: ProductQuery,
    ) -> impl Future<Output = Result<(Vec<Product>, u64), CoreError>> + Send;

    fn get_by_id(
        &self,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn create(&self, product: Product) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn update(
        &self,
        input: UpdateProductInput,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn delete(
        &self,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;
}

pub trait ProductPolicy: Send + Sync {
    fn can_create_product(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_update_product(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_delete_product(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
