use crate::{
    domain::common::{CatalogConfig, policies::CatalogPolicy, services::Service},
    infrastructure::{
        category::repositories::category_repository::PostgresCategoryRepository,
        crypto::argon2_hasher::Argon2HasherRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::repository::PostgresHealthCheckRepository,
        jwt::hs256_token_repository::Hs256TokenRepository,
        product::repositories::product_repository::PostgresProductRepository,
        user::repositories::user_repository::PostgresUserRepository,
    },
};

pub type CatalogService = Service<
    PostgresCategoryRepository,
    PostgresProductRepository,
    PostgresUserRepository,
    Argon2HasherRepository,
    Hs256TokenRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: CatalogConfig) -> Result<CatalogService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url,
        max_connections: config.database.max_connections,
        acquire_timeout: config.database.acquire_timeout,
    })
    .await?;

    let db = postgres.get_db();

    Ok(Service::new(
        PostgresCategoryRepository::new(db.clone()),
        PostgresProductRepository::new(db.clone()),
        PostgresUserRepository::new(db.clone()),
        Argon2HasherRepository::new(),
        Hs256TokenRepository::new(&config.auth.jwt_secret, config.auth.token_ttl),
        PostgresHealthCheckRepository::new(db),
        CatalogPolicy::new(),
        config.database.query_timeout,
    ))
}
