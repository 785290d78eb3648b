use std::time::Duration;

use catalog_core::domain::common::{AuthConfig, CatalogConfig, DatabaseConfig};
use clap::{ArgAction, Parser};

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-api", version, about = "Product catalog HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "cors-origins",
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "db-url", env = "DB_URL")]
    pub url: String,

    #[arg(long = "db-max-connections", env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    #[arg(
        long = "db-acquire-timeout-secs",
        env = "DB_ACQUIRE_TIMEOUT_SECS",
        default_value_t = 5
    )]
    pub acquire_timeout_secs: u64,

    /// Deadline for one product listing, count and page queries together.
    #[arg(long = "query-timeout-ms", env = "QUERY_TIMEOUT_MS", default_value_t = 5000)]
    pub query_timeout_ms: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    #[arg(long = "jwt-secret", env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    #[arg(long = "jwt-ttl-seconds", env = "JWT_TTL_SECONDS", default_value_t = 3600)]
    pub jwt_ttl_seconds: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(
        long = "log-json",
        env = "LOG_JSON",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub json: bool,
}

impl From<Args> for CatalogConfig {
    fn from(args: Args) -> Self {
        CatalogConfig {
            database: DatabaseConfig {
                url: args.db.url,
                max_connections: args.db.max_connections,
                acquire_timeout: Duration::from_secs(args.db.acquire_timeout_secs),
                query_timeout: Duration::from_millis(args.db.query_timeout_ms),
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                token_ttl: Duration::from_secs(args.auth.jwt_ttl_seconds),
            },
        }
    }
}
