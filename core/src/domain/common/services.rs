use std::time::Duration;

use crate::domain::common::policies::CatalogPolicy;

/// Aggregates every port used by the catalog services.
///
/// Each service trait (`ProductService`, `CategoryService`, ...) is implemented
/// on this struct so that the HTTP layer only ever holds one value.
#[derive(Clone)]
pub struct Service<C, P, U, H, T, HC> {
    pub(crate) category_repository: C,
    pub(crate) product_repository: P,
    pub(crate) user_repository: U,
    pub(crate) hasher_repository: H,
    pub(crate) token_repository: T,
    pub(crate) health_check_repository: HC,
    pub(crate) policy: CatalogPolicy,
    pub(crate) query_timeout: Duration,
}

impl<C, P, U, H, T, HC> Service<C, P, U, H, T, HC> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        category_repository: C,
        product_repository: P,
        user_repository: U,
        hasher_repository: H,
        token_repository: T,
        health_check_repository: HC,
        policy: CatalogPolicy,
        query_timeout: Duration,
    ) -> Self {
        Self {
            category_repository,
            product_repository,
            user_repository,
            hasher_repository,
            token_repository,
            health_check_repository,
            policy,
            query_timeout,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use crate::domain::{
        category::ports::MockCategoryRepository, common::policies::CatalogPolicy,
        crypto::ports::MockHasherRepository, health::ports::MockHealthCheckRepository,
        jwt::ports::MockTokenRepository, product::ports::MockProductRepository,
        user::ports::MockUserRepository,
    };

    use super::Service;

    pub type TestService = Service<
        MockCategoryRepository,
        MockProductRepository,
        MockUserRepository,
        MockHasherRepository,
        MockTokenRepository,
        MockHealthCheckRepository,
    >;

    /// Mocks that a test configures before they are moved into the service.
    pub struct Mocks {
        pub categories: MockCategoryRepository,
        pub products: MockProductRepository,
        pub users: MockUserRepository,
        pub hasher: MockHasherRepository,
        pub tokens: MockTokenRepository,
        pub health: MockHealthCheckRepository,
        pub query_timeout: Duration,
    }

    impl Default for Mocks {
        fn default() -> Self {
            Self {
                categories: MockCategoryRepository::new(),
                products: MockProductRepository::new(),
                users: MockUserRepository::new(),
                hasher: MockHasherRepository::new(),
                tokens: MockTokenRepository::new(),
                health: MockHealthCheckRepository::new(),
                query_timeout: Duration::from_secs(5),
            }
        }
    }

    impl Mocks {
        pub fn into_service(self) -> TestService {
            Service::new(
                self.categories,
                self.products,
                self.users,
                self.hasher,
                self.tokens,
                self.health,
                CatalogPolicy::new(),
                self.query_timeout,
            )
        }
    }
}
