use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{Set, Unchanged},
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    SqlErr, Statement, Value,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        product::{
            entities::Product,
            ports::ProductRepository,
            query::{PRODUCT_COLUMNS, PRODUCT_SOURCE, ProductQuery, QueryArg},
            value_objects::UpdateProductInput,
        },
    },
    entity::products::{ActiveModel, Entity},
    infrastructure::product::mappers::ProductRow,
};

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pub db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn statement(sql: String, args: Vec<QueryArg>) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql,
            args.into_iter().map(Value::from).collect::<Vec<_>>(),
        )
    }

    fn map_row(row: &sea_orm::QueryResult) -> Result<Product, CoreError> {
        ProductRow::from_query_result(row, "").map(Product::from).map_err(|e| {
            error!("Failed to map product row: {}", e);
            CoreError::InternalServerError
        })
    }
}

fn map_write_error(e: DbErr, action: &str) -> CoreError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => CoreError::CategoryReferenceNotFound,
        _ => {
            error!("Failed to {} product: {}", action, e);
            CoreError::InternalServerError
        }
    }
}

impl ProductRepository for PostgresProductRepository {
    async fn list_products(&self, query: ProductQuery) -> Result<(Vec<Product>, u64), CoreError> {
        let count_stmt = Self::statement(query.count_sql(), query.predicate_args());

        let total = self
            .db
            .query_one(count_stmt)
            .await
            .map_err(|e| {
                error!("Failed to count products: {}", e);
                CoreError::InternalServerError
            })?
            .map(|row| row.try_get::<i64>("", "total"))
            .transpose()
            .map_err(|e| {
                error!("Failed to read product count: {}", e);
                CoreError::InternalServerError
            })?
            .unwrap_or(0);

        let page_stmt = Self::statement(query.page_sql(), query.page_args());

        let rows = self.db.query_all(page_stmt).await.map_err(|e| {
            error!("Failed to list products: {}", e);
            CoreError::InternalServerError
        })?;

        let items = rows
            .iter()
            .map(Self::map_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((items, u64::try_from(total).unwrap_or(0)))
    }

    async fn get_by_id(&self, product_id: Uuid) -> Result<Option<Product>, CoreError> {
        let stmt = Self::statement(
            format!("SELECT {PRODUCT_COLUMNS} FROM {PRODUCT_SOURCE} WHERE p.id = $1"),
            vec![QueryArg::Uuid(product_id)],
        );

        let row = self.db.query_one(stmt).await.map_err(|e| {
            error!("Failed to get product by id: {}", e);
            CoreError::InternalServerError
        })?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn create(&self, product: Product) -> Result<Product, CoreError> {
        let active_model = ActiveModel {
            id: Set(product.id),
            category_id: Set(product.category_id),
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            created_at: Set(product.created_at.fixed_offset()),
            updated_at: Set(product.updated_at.fixed_offset()),
        };

        Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| map_write_error(e, "create"))?;

        self.get_by_id(product.id).await?.ok_or_else(|| {
            error!("Created product {} could not be read back", product.id);
            CoreError::InternalServerError
        })
    }

    async fn update(&self, input: UpdateProductInput) -> Result<Option<Product>, CoreError> {
        let active_model = ActiveModel {
            id: Unchanged(input.product_id),
            category_id: Set(input.category_id),
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        match active_model.update(&self.db).await {
            Ok(_) => self.get_by_id(input.product_id).await,
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(map_write_error(e, "update")),
        }
    }

    async fn delete(&self, product_id: Uuid) -> Result<Option<Product>, CoreError> {
        let Some(existing) = self.get_by_id(product_id).await? else {
            return Ok(None);
        };

        let result = Entity::delete_by_id(product_id)
            .exec(&self.db)
            .await
            .map_err(|e| map_write_error(e, "delete"))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(existing))
    }
}
