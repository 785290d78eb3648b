//! Translation of a [`ProductFilter`] into parameterized SQL fragments.
//!
//! Caller supplied values only ever travel as bound arguments. The text of the
//! query is assembled exclusively from the static strings of [`Predicate`],
//! [`SortColumn`] and [`SortDirection`], and placeholders are numbered from the
//! position of the value in the argument list so the two cannot drift apart.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::product::value_objects::ProductFilter;

/// Columns every product read selects, aliased so rows map by name.
pub const PRODUCT_COLUMNS: &str = "p.id, p.category_id, c.name AS category_name, p.name, \
     p.description, p.price, p.created_at, p.updated_at";

/// Source of every product read that carries the category name.
pub const PRODUCT_SOURCE: &str = "products p JOIN categories c ON c.id = p.category_id";

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryArg {
    Uuid(Uuid),
    Decimal(Decimal),
    Text(String),
    BigInt(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    CategoryEquals,
    MinPrice,
    MaxPrice,
    NameContains,
}

impl Predicate {
    fn render(&self, placeholder: usize) -> String {
        match self {
            Predicate::CategoryEquals => format!("p.category_id = ${placeholder}"),
            Predicate::MinPrice => format!("p.price >= ${placeholder}"),
            Predicate::MaxPrice => format!("p.price <= ${placeholder}"),
            Predicate::NameContains => format!("p.name ILIKE ${placeholder}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub predicate: Predicate,
    pub value: QueryArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    CreatedAt,
    Price,
}

impl SortColumn {
    /// Only `price` selects a non-default column; anything else sorts by creation time.
    pub fn resolve(sort: Option<&str>) -> Self {
        match sort {
            Some("price") => SortColumn::Price,
            _ => SortColumn::CreatedAt,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortColumn::CreatedAt => "p.created_at",
            SortColumn::Price => "p.price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Only a case-insensitive `asc` sorts ascending.
    pub fn resolve(order: Option<&str>) -> Self {
        match order {
            Some(order) if order.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub conditions: Vec<Condition>,
    pub sort: SortColumn,
    pub direction: SortDirection,
    pub limit: u64,
    pub offset: u64,
}

impl ProductQuery {
    pub fn build(filter: &ProductFilter) -> Self {
        let mut conditions = Vec::new();

        if let Some(category_id) = filter.category_id {
            conditions.push(Condition {
                predicate: Predicate::CategoryEquals,
                value: QueryArg::Uuid(category_id),
            });
        }

        if let Some(min_price) = filter.min_price {
            conditions.push(Condition {
                predicate: Predicate::MinPrice,
                value: QueryArg::Decimal(min_price),
            });
        }

        if let Some(max_price) = filter.max_price {
            conditions.push(Condition {
                predicate: Predicate::MaxPrice,
                value: QueryArg::Decimal(max_price),
            });
        }

        if let Some(search) = filter.search.as_deref().map(str::trim)
            && !search.is_empty()
        {
            conditions.push(Condition {
                predicate: Predicate::NameContains,
                value: QueryArg::Text(format!("%{}%", escape_like(search))),
            });
        }

        Self {
            conditions,
            sort: SortColumn::resolve(filter.sort.as_deref()),
            direction: SortDirection::resolve(filter.order.as_deref()),
            limit: filter.limit,
            offset: filter.offset(),
        }
    }

    /// Predicates joined with `AND`, starting from an always-true fragment.
    pub fn where_clause(&self) -> String {
        let mut fragments = vec!["1=1".to_string()];
        fragments.extend(
            self.conditions
                .iter()
                .enumerate()
                .map(|(index, condition)| condition.predicate.render(index + 1)),
        );
        fragments.join(" AND ")
    }

    /// Arguments of the count query, in placeholder order.
    pub fn predicate_args(&self) -> Vec<QueryArg> {
        self.conditions
            .iter()
            .map(|condition| condition.value.clone())
            .collect()
    }

    pub fn order_by(&self) -> String {
        let direction = self.direction.as_sql();
        format!("{} {}, p.id {}", self.sort.as_sql(), direction, direction)
    }

    pub fn limit_placeholder(&self) -> usize {
        self.conditions.len() + 1
    }

    pub fn offset_placeholder(&self) -> usize {
        self.conditions.len() + 2
    }

    /// Arguments of the page query: predicates, then limit, then offset.
    pub fn page_args(&self) -> Vec<QueryArg> {
        let mut args = self.predicate_args();
        args.push(QueryArg::BigInt(to_bigint(self.limit)));
        args.push(QueryArg::BigInt(to_bigint(self.offset)));
        args
    }

    /// Total number of matches, bound with [`Self::predicate_args`].
    pub fn count_sql(&self) -> String {
        format!(
            "SELECT COUNT(*) AS total FROM products p WHERE {}",
            self.where_clause()
        )
    }

    /// One page of matches, bound with [`Self::page_args`].
    pub fn page_sql(&self) -> String {
        format!(
            "SELECT {PRODUCT_COLUMNS} FROM {PRODUCT_SOURCE} WHERE {} ORDER BY {} LIMIT ${} OFFSET ${}",
            self.where_clause(),
            self.order_by(),
            self.limit_placeholder(),
            self.offset_placeholder(),
        )
    }
}

fn to_bigint(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Makes `%`, `_` and `\` match literally under the default LIKE escape.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn placeholders(sql: &str) -> usize {
        sql.matches('$').count()
    }

    fn full_filter() -> ProductFilter {
        ProductFilter {
            category_id: Some(Uuid::nil()),
            min_price: Some(Decimal::from(10)),
            max_price: Some(Decimal::from(20)),
            search: Some("  shirt ".to_string()),
            ..ProductFilter::new(Some(2), Some(5))
        }
    }

    #[test]
    fn test_no_filters_is_always_true() {
        let query = ProductQuery::build(&ProductFilter::default());
        assert_eq!(query.where_clause(), "1=1");
        assert!(query.predicate_args().is_empty());
        assert_eq!(
            query.page_args(),
            vec![QueryArg::BigInt(10), QueryArg::BigInt(0)]
        );
        assert_eq!(query.limit_placeholder(), 1);
        assert_eq!(query.offset_placeholder(), 2);
    }

    #[test]
    fn test_all_filters_in_fixed_order() {
        let query = ProductQuery::build(&full_filter());

        assert_eq!(
            query.where_clause(),
            "1=1 AND p.category_id = $1 AND p.price >= $2 AND p.price <= $3 AND p.name ILIKE $4"
        );
        assert_eq!(
            query.predicate_args(),
            vec![
                QueryArg::Uuid(Uuid::nil()),
                QueryArg::Decimal(Decimal::from(10)),
                QueryArg::Decimal(Decimal::from(20)),
                QueryArg::Text("%shirt%".to_string()),
            ]
        );
    }

    #[test]
    fn test_placeholders_follow_present_filters_only() {
        let filter = ProductFilter {
            max_price: Some(Decimal::from_str("19.99").unwrap()),
            search: Some("hat".to_string()),
            ..ProductFilter::default()
        };
        let query = ProductQuery::build(&filter);

        assert_eq!(
            query.where_clause(),
            "1=1 AND p.price <= $1 AND p.name ILIKE $2"
        );
        assert_eq!(query.limit_placeholder(), 3);
        assert_eq!(query.offset_placeholder(), 4);
    }

    #[test]
    fn test_placeholder_count_matches_arguments() {
        let filters = [
            ProductFilter::default(),
            full_filter(),
            ProductFilter {
                category_id: Some(Uuid::new_v4()),
                ..ProductFilter::default()
            },
            ProductFilter {
                min_price: Some(Decimal::ONE),
                search: Some("x".to_string()),
                ..ProductFilter::default()
            },
        ];

        for filter in filters {
            let query = ProductQuery::build(&filter);
            assert_eq!(
                placeholders(&query.where_clause()),
                query.predicate_args().len()
            );

            let page_sql = format!(
                "{} LIMIT ${} OFFSET ${}",
                query.where_clause(),
                query.limit_placeholder(),
                query.offset_placeholder()
            );
            assert_eq!(placeholders(&page_sql), query.page_args().len());
        }
    }

    #[test]
    fn test_blank_search_adds_no_predicate() {
        let filter = ProductFilter {
            search: Some("   ".to_string()),
            ..ProductFilter::default()
        };
        let query = ProductQuery::build(&filter);
        assert_eq!(query.where_clause(), "1=1");
        assert!(query.predicate_args().is_empty());
    }

    #[test]
    fn test_search_escapes_like_wildcards() {
        let filter = ProductFilter {
            search: Some("100%_cotton\\".to_string()),
            ..ProductFilter::default()
        };
        let query = ProductQuery::build(&filter);
        assert_eq!(
            query.predicate_args(),
            vec![QueryArg::Text("%100\\%\\_cotton\\\\%".to_string())]
        );
    }

    #[test]
    fn test_limit_and_offset_are_trailing_arguments() {
        let query = ProductQuery::build(&full_filter());
        let args = query.page_args();
        assert_eq!(args.len(), 6);
        assert_eq!(args[4], QueryArg::BigInt(5));
        assert_eq!(args[5], QueryArg::BigInt(5));
    }

    #[test]
    fn test_unfiltered_statements() {
        let query = ProductQuery::build(&ProductFilter::default());

        assert_eq!(
            query.count_sql(),
            "SELECT COUNT(*) AS total FROM products p WHERE 1=1"
        );
        assert_eq!(
            query.page_sql(),
            "SELECT p.id, p.category_id, c.name AS category_name, p.name, p.description, \
             p.price, p.created_at, p.updated_at \
             FROM products p JOIN categories c ON c.id = p.category_id \
             WHERE 1=1 ORDER BY p.created_at DESC, p.id DESC LIMIT $1 OFFSET $2"
        );
        assert_eq!(placeholders(&query.count_sql()), 0);
        assert_eq!(placeholders(&query.page_sql()), query.page_args().len());
    }

    #[test]
    fn test_fully_filtered_statements() {
        let query = ProductQuery::build(&full_filter());

        assert_eq!(
            query.count_sql(),
            "SELECT COUNT(*) AS total FROM products p WHERE 1=1 AND p.category_id = $1 \
             AND p.price >= $2 AND p.price <= $3 AND p.name ILIKE $4"
        );
        assert!(query.page_sql().ends_with(
            "WHERE 1=1 AND p.category_id = $1 AND p.price >= $2 AND p.price <= $3 \
             AND p.name ILIKE $4 ORDER BY p.created_at DESC, p.id DESC LIMIT $5 OFFSET $6"
        ));
        assert_eq!(
            query.page_args()[4..],
            [QueryArg::BigInt(5), QueryArg::BigInt(5)]
        );
        assert_eq!(placeholders(&query.count_sql()), query.predicate_args().len());
        assert_eq!(placeholders(&query.page_sql()), query.page_args().len());
    }

    #[test]
    fn test_price_range_statements_bind_both_bounds() {
        let filter = ProductFilter {
            min_price: Some(Decimal::from(10)),
            max_price: Some(Decimal::from(20)),
            sort: Some("price".to_string()),
            order: Some("asc".to_string()),
            ..ProductFilter::default()
        };
        let query = ProductQuery::build(&filter);

        assert!(query.page_sql().ends_with(
            "WHERE 1=1 AND p.price >= $1 AND p.price <= $2 \
             ORDER BY p.price ASC, p.id ASC LIMIT $3 OFFSET $4"
        ));
        assert_eq!(
            query.page_args(),
            vec![
                QueryArg::Decimal(Decimal::from(10)),
                QueryArg::Decimal(Decimal::from(20)),
                QueryArg::BigInt(10),
                QueryArg::BigInt(0),
            ]
        );
    }

    #[test]
    fn test_search_statement_is_case_insensitive() {
        let filter = ProductFilter {
            search: Some("Shirt".to_string()),
            ..ProductFilter::new(Some(3), None)
        };
        let query = ProductQuery::build(&filter);

        assert_eq!(
            query.count_sql(),
            "SELECT COUNT(*) AS total FROM products p WHERE 1=1 AND p.name ILIKE $1"
        );
        assert!(query.page_sql().ends_with("LIMIT $2 OFFSET $3"));
        assert_eq!(
            query.page_args(),
            vec![
                QueryArg::Text("%Shirt%".to_string()),
                QueryArg::BigInt(10),
                QueryArg::BigInt(20),
            ]
        );
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let query = ProductQuery::build(&ProductFilter::default());
        assert_eq!(query.order_by(), "p.created_at DESC, p.id DESC");
    }

    #[test]
    fn test_price_sort_ascending() {
        let filter = ProductFilter {
            sort: Some("price".to_string()),
            order: Some("ASC".to_string()),
            ..ProductFilter::default()
        };
        let query = ProductQuery::build(&filter);
        assert_eq!(query.order_by(), "p.price ASC, p.id ASC");
    }

    #[test]
    fn test_unknown_sort_column_resolves_to_default() {
        let injected = ProductQuery::build(&ProductFilter {
            sort: Some("name; DROP TABLE products;--".to_string()),
            ..ProductFilter::default()
        });
        let default = ProductQuery::build(&ProductFilter::default());

        assert_eq!(injected.sort, SortColumn::CreatedAt);
        assert_eq!(injected.order_by(), default.order_by());
        assert!(!injected.order_by().contains("DROP"));
    }

    #[test]
    fn test_order_token_other_than_asc_is_descending() {
        for order in ["desc", "ascending", " asc", "1", "asc;--", ""] {
            assert_eq!(SortDirection::resolve(Some(order)), SortDirection::Desc);
        }
        assert_eq!(SortDirection::resolve(None), SortDirection::Desc);
        assert_eq!(SortDirection::resolve(Some("aSc")), SortDirection::Asc);
    }

    #[test]
    fn test_sort_key_is_exact_match() {
        assert_eq!(SortColumn::resolve(Some("price")), SortColumn::Price);
        assert_eq!(SortColumn::resolve(Some("Price")), SortColumn::CreatedAt);
        assert_eq!(SortColumn::resolve(Some("created_at")), SortColumn::CreatedAt);
        assert_eq!(SortColumn::resolve(None), SortColumn::CreatedAt);
    }
}
