use std::str::FromStr;

use catalog_core::domain::{
    common::entities::app_errors::CoreError, product::value_objects::ProductFilter,
};
use rust_decimal::Decimal;
use utoipa::IntoParams;
use uuid::Uuid;

/// Raw product listing parameters, kept as text until [`Self::into_filter`].
///
/// Only the first occurrence of a repeated key is kept.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQueryParams {
    /// 1-based page number, defaults to 1.
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    /// Page size, defaults to 10 and is capped at 100.
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
    #[param(value_type = Option<Uuid>)]
    pub category_id: Option<String>,
    #[param(value_type = Option<f64>)]
    pub min_price: Option<String>,
    #[param(value_type = Option<f64>)]
    pub max_price: Option<String>,
    /// Case-insensitive substring of the product name.
    pub q: Option<String>,
    /// `price` or `created_at` (default).
    pub sort: Option<String>,
    /// `asc` or `desc` (default).
    pub order: Option<String>,
}

impl ProductQueryParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                "category_id" => &mut params.category_id,
                "min_price" => &mut params.min_price,
                "max_price" => &mut params.max_price,
                "q" => &mut params.q,
                "sort" => &mut params.sort,
                "order" => &mut params.order,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    /// Turns the raw parameters into a normalized [`ProductFilter`].
    ///
    /// Malformed `category_id`, `min_price` or `max_price` fail the whole request;
    /// unparsable `page` or `limit` silently fall back to their defaults.
    pub fn into_filter(self) -> Result<ProductFilter, CoreError> {
        let category_id = trimmed(&self.category_id)
            .map(|value| {
                Uuid::parse_str(value)
                    .map_err(|_| CoreError::InvalidParameter("category_id".to_string()))
            })
            .transpose()?;

        let min_price = trimmed(&self.min_price)
            .map(|value| parse_price(value, "min_price"))
            .transpose()?;

        let max_price = trimmed(&self.max_price)
            .map(|value| parse_price(value, "max_price"))
            .transpose()?;

        let page = trimmed(&self.page).and_then(|value| value.parse::<i64>().ok());
        let limit = trimmed(&self.limit).and_then(|value| value.parse::<i64>().ok());

        Ok(ProductFilter {
            category_id,
            min_price,
            max_price,
            search: self.q,
            sort: self.sort,
            order: self.order,
            ..ProductFilter::new(page, limit)
        })
    }
}

/// Present and non-blank after trimming.
fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

fn parse_price(value: &str, name: &str) -> Result<Decimal, CoreError> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| CoreError::InvalidParameter(name.to_string()))
}
