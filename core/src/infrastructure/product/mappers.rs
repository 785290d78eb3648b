use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use sea_orm::{FromQueryResult, Value};
use uuid::Uuid;

use crate::domain::product::{entities::Product, query::QueryArg};

/// Row shape of [`crate::domain::product::query::PRODUCT_COLUMNS`].
#[derive(Debug, Clone, FromQueryResult)]
pub struct ProductRow {
    pub id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            category_id: row.category_id,
            category_name: row.category_name,
            name: row.name,
            description: row.description,
            price: row.price,
            created_at: row.created_at.to_utc(),
            updated_at: row.updated_at.to_utc(),
        }
    }
}

impl From<QueryArg> for Value {
    fn from(arg: QueryArg) -> Self {
        match arg {
            QueryArg::Uuid(value) => value.into(),
            QueryArg::Decimal(value) => value.into(),
            QueryArg::Text(value) => value.into(),
            QueryArg::BigInt(value) => value.into(),
        }
    }
}
