use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenRepository,
    product::{
        entities::Product,
        ports::{ProductPolicy, ProductRepository, ProductService},
        query::ProductQuery,
        value_objects::{CreateProductInput, ProductFilter, ProductPage, UpdateProductInput},
    },
    user::ports::UserRepository,
};

impl<C, P, U, H, T, HC> Service<C, P, U, H, T, HC>
where
    C: CategoryRepository,
{
    async fn ensure_category_exists(&self, category_id: Uuid) -> Result<(), CoreError> {
        if self.category_repository.exists(category_id).await? {
            Ok(())
        } else {
            Err(CoreError::CategoryReferenceNotFound)
        }
    }
}

impl<C, P, U, H, T, HC> ProductService for Service<C, P, U, H, T, HC>
where
    C: CategoryRepository,
    P: ProductRepository,
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_products(&self, filter: ProductFilter) -> Result<ProductPage, CoreError> {
        let query = ProductQuery::build(&filter);
        debug!(
            where_clause = %query.where_clause(),
            order_by = %query.order_by(),
            args = query.page_args().len(),
            "resolved product query"
        );

        let (items, total) =
            tokio::time::timeout(self.query_timeout, self.product_repository.list_products(query))
                .await
                .map_err(|_| {
                    warn!(timeout = ?self.query_timeout, "product listing timed out");
                    CoreError::QueryTimeout
                })??;

        Ok(ProductPage {
            items,
            page: filter.page,
            limit: filter.limit,
            total,
        })
    }

    #[instrument(skip(self))]
    async fn get_product(&self, product_id: Uuid) -> Result<Product, CoreError> {
        self.product_repository
            .get_by_id(product_id)
            .await?
            .ok_or(CoreError::ProductNotFound)
    }

    #[instrument(skip(self, input), fields(category_id = %input.category_id))]
    async fn create_product(
        &self,
        identity: Identity,
        input: CreateProductInput,
    ) -> Result<Product, CoreError> {
        ensure_policy(self.policy.can_create_product(&identity).await, "forbidden")?;
        self.ensure_category_exists(input.category_id).await?;

        self.product_repository
            .create(Product::new(
                input.category_id,
                input.name,
                input.description,
                input.price,
            ))
            .await
    }

    #[instrument(skip(self, input), fields(product_id = %input.product_id))]
    async fn update_product(
        &self,
        identity: Identity,
        input: UpdateProductInput,
    ) -> Result<Product, CoreError> {
        ensure_policy(self.policy.can_update_product(&identity).await, "forbidden")?;
        self.ensure_category_exists(input.category_id).await?;

        self.product_repository
            .update(input)
            .await?
            .ok_or(CoreError::ProductNotFound)
    }

    #[instrument(skip(self))]
    async fn delete_product(
        &self,
        identity: Identity,
        product_id: Uuid,
    ) -> Result<Product, CoreError> {
        ensure_policy(self.policy.can_delete_product(&identity).await, "forbidden")?;

        self.product_repository
            .delete(product_id)
            .await?
            .ok_or(CoreError::ProductNotFound)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{
        authentication::value_objects::Role, common::services::test_support::Mocks,
    };

    fn admin() -> Identity {
        Identity::new(Uuid::new_v4(), Role::Admin)
    }

    fn create_input(category_id: Uuid) -> CreateProductInput {
        CreateProductInput {
            category_id,
            name: "Linen shirt".to_string(),
            description: "Breathable".to_string(),
            price: Decimal::new(4999, 2),
        }
    }

    #[tokio::test]
    async fn test_get_products_reports_normalized_page() {
        let mut mocks = Mocks::default();
        mocks
            .products
            .expect_list_products()
            .withf(|query| query.limit == 100 && query.offset == 200)
            .times(1)
            .returning(|_| Box::pin(async { Ok((vec![], 240)) }));

        let service = mocks.into_service();
        let page = service
            .get_products(ProductFilter::new(Some(3), Some(1000)))
            .await
            .unwrap();

        assert_eq!(page.page, 3);
        assert_eq!(page.limit, 100);
        assert_eq!(page.total, 240);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_default_listing_returns_first_page_with_full_total() {
        let mut mocks = Mocks::default();
        mocks
            .products
            .expect_list_products()
            .withf(|query| query.limit == 10 && query.offset == 0 && query.conditions.is_empty())
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    let items = (0..10)
                        .map(|i| {
                            Product::new(
                                Uuid::new_v4(),
                                format!("Item {i}"),
                                String::new(),
                                Decimal::from(i + 1),
                            )
                        })
                        .collect();
                    Ok((items, 25))
                })
            });

        let service = mocks.into_service();
        let page = service
            .get_products(ProductFilter::default())
            .await
            .unwrap();

        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total, 25);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
    }

    #[tokio::test]
    async fn test_get_products_times_out() {
        let mut mocks = Mocks {
            query_timeout: Duration::from_millis(10),
            ..Mocks::default()
        };
        mocks.products.expect_list_products().returning(|_| {
            Box::pin(async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                Ok((vec![], 0))
            })
        });

        let service = mocks.into_service();
        let result = service.get_products(ProductFilter::default()).await;

        assert_eq!(result, Err(CoreError::QueryTimeout));
    }

    #[tokio::test]
    async fn test_get_products_propagates_store_failure() {
        let mut mocks = Mocks::default();
        mocks
            .products
            .expect_list_products()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let service = mocks.into_service();
        let result = service.get_products(ProductFilter::default()).await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut mocks = Mocks::default();
        mocks
            .products
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = mocks.into_service();
        let result = service.get_product(Uuid::new_v4()).await;

        assert_eq!(result, Err(CoreError::ProductNotFound));
    }

    #[tokio::test]
    async fn test_create_product_with_unknown_category_never_inserts() {
        let mut mocks = Mocks::default();
        mocks
            .categories
            .expect_exists()
            .returning(|_| Box::pin(async { Ok(false) }));
        mocks.products.expect_create().never();

        let service = mocks.into_service();
        let result = service
            .create_product(admin(), create_input(Uuid::new_v4()))
            .await;

        assert_eq!(result, Err(CoreError::CategoryReferenceNotFound));
    }

    #[tokio::test]
    async fn test_create_product_requires_admin() {
        let mut mocks = Mocks::default();
        mocks.categories.expect_exists().never();
        mocks.products.expect_create().never();

        let service = mocks.into_service();
        let result = service
            .create_product(
                Identity::new(Uuid::new_v4(), Role::User),
                create_input(Uuid::new_v4()),
            )
            .await;

        assert_eq!(result, Err(CoreError::Forbidden("forbidden".to_string())));
    }

    #[tokio::test]
    async fn test_create_product_keeps_input_fields() {
        let category_id = Uuid::new_v4();
        let mut mocks = Mocks::default();
        mocks
            .categories
            .expect_exists()
            .returning(|_| Box::pin(async { Ok(true) }));
        mocks
            .products
            .expect_create()
            .withf(move |product| {
                product.category_id == category_id && product.price == Decimal::new(4999, 2)
            })
            .returning(|product| Box::pin(async move { Ok(product) }));

        let service = mocks.into_service();
        let product = service
            .create_product(admin(), create_input(category_id))
            .await
            .unwrap();

        assert_eq!(product.name, "Linen shirt");
        assert_eq!(product.created_at, product.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let mut mocks = Mocks::default();
        mocks
            .categories
            .expect_exists()
            .returning(|_| Box::pin(async { Ok(true) }));
        mocks
            .products
            .expect_update()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = mocks.into_service();
        let result = service
            .update_product(
                admin(),
                UpdateProductInput {
                    product_id: Uuid::new_v4(),
                    category_id: Uuid::new_v4(),
                    name: "Wool hat".to_string(),
                    description: String::new(),
                    price: Decimal::ONE,
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::ProductNotFound));
    }

    #[tokio::test]
    async fn test_delete_product_requires_admin() {
        let mut mocks = Mocks::default();
        mocks.products.expect_delete().never();

        let service = mocks.into_service();
        let result = service
            .delete_product(Identity::new(Uuid::new_v4(), Role::User), Uuid::new_v4())
            .await;

        assert_eq!(result, Err(CoreError::Forbidden("forbidden".to_string())));
    }
}
