use crate::domain::{
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    jwt::ports::TokenRepository,
    product::ports::ProductRepository,
    user::ports::UserRepository,
};

impl<C, P, U, H, T, HC> HealthCheckService for Service<C, P, U, H, T, HC>
where
    C: CategoryRepository,
    P: ProductRepository,
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }
}
