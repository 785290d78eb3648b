use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::product::entities::Product;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Recognized options of a product listing request.
///
/// `page` and `limit` are always normalized; `sort` and `order` are kept as the
/// caller sent them and only resolved through the allow-list in
/// [`ProductQuery`](super::query::ProductQuery).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub page: u64,
    pub limit: u64,
    pub category_id: Option<Uuid>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            category_id: None,
            min_price: None,
            max_price: None,
            search: None,
            sort: None,
            order: None,
        }
    }
}

impl ProductFilter {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: normalize_page(page),
            limit: normalize_limit(limit),
            ..Default::default()
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Pages below 1 (or absent) resolve to the first page.
pub fn normalize_page(page: Option<i64>) -> u64 {
    match page {
        Some(page) if page >= 1 => page as u64,
        _ => DEFAULT_PAGE,
    }
}

/// Limits below 1 reset to the default rather than flooring to 1.
pub fn normalize_limit(limit: Option<i64>) -> u64 {
    match limit {
        Some(limit) if limit >= 1 => (limit as u64).min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

#[derive(Debug, Clone)]
pub struct CreateProductInput {
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

#[derive(Debug, Clone)]
pub struct UpdateProductInput {
    pub product_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}
