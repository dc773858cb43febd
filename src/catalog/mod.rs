pub mod criteria;
pub mod db;
pub mod demo;
pub mod memory;

use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::models::Product;

pub use criteria::{FilterCriteria, SortKey};
pub use db::DbCatalog;
pub use memory::MemoryCatalog;

/// One page of catalog matches plus the match count across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub items: Vec<Product>,
    pub total: i64,
}

/// A product source the storefront can query. Both backends answer the
/// same criteria with the same pages, so callers never care which one
/// they hold.
#[allow(async_fn_in_trait)]
pub trait CatalogBackend {
    async fn query(&self, criteria: &FilterCriteria) -> AppResult<CatalogPage>;

    async fn product(&self, id: Uuid) -> AppResult<Option<Product>>;
}

/// Validate `criteria`, then run it. Invalid criteria are rejected
/// before the backend is touched.
pub async fn search<B: CatalogBackend>(
    backend: &B,
    criteria: &FilterCriteria,
) -> AppResult<CatalogPage> {
    criteria.validate()?;
    backend.query(criteria).await
}
