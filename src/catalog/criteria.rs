use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Finish;

/// Upper bound of the storefront price slider. A `max_price` at the
/// ceiling means "unbounded" and emits no price clause.
pub const PRICE_CEILING: f64 = 5000.0;

pub const DEFAULT_LIMIT: i64 = 20;

/// Sort order requested by the shopper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    Newest,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Price,
    Rating,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortKey {
    /// Column and direction a key resolves to. Relevance carries no
    /// ranking signal of its own and falls back to newest-first.
    pub fn ordering(&self) -> (SortColumn, SortDirection) {
        match self {
            SortKey::PriceAsc => (SortColumn::Price, SortDirection::Asc),
            SortKey::PriceDesc => (SortColumn::Price, SortDirection::Desc),
            SortKey::Rating => (SortColumn::Rating, SortDirection::Desc),
            SortKey::Newest | SortKey::Relevance => (SortColumn::CreatedAt, SortDirection::Desc),
        }
    }
}

/// Everything a catalog query can constrain, parsed and defaulted once
/// at the edge. Backends receive only validated criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    #[validate(range(min = 0.0))]
    pub min_price: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub max_price: f64,
    pub finishes: Vec<Finish>,
    pub categories: Vec<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub min_rating: f64,
    pub in_stock_only: bool,
    pub search_query: String,
    pub sort_by: SortKey,
    #[validate(range(min = 1))]
    pub page: i64,
    #[validate(range(min = 1, max = 100))]
    pub limit: i64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            max_price: PRICE_CEILING,
            finishes: Vec::new(),
            categories: Vec::new(),
            min_rating: 0.0,
            in_stock_only: false,
            search_query: String::new(),
            sort_by: SortKey::default(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl FilterCriteria {
    /// Rows to skip before the requested page starts.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1) * self.limit
    }
}
