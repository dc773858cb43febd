use uuid::Uuid;

use crate::catalog::criteria::{FilterCriteria, PRICE_CEILING, SortKey};
use crate::catalog::{CatalogBackend, CatalogPage};
use crate::error::AppResult;
use crate::models::Product;
use crate::routes::params::ListingParams;

/// Catalog backend over a fixed in-memory product list. Answers the
/// same criteria as [`DbCatalog`](crate::catalog::DbCatalog) with the
/// same pages.
pub struct MemoryCatalog {
    products: Vec<Product>,
}

impl MemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl CatalogBackend for MemoryCatalog {
    async fn query(&self, criteria: &FilterCriteria) -> AppResult<CatalogPage> {
        let mut matches: Vec<Product> = self
            .products
            .iter()
            .filter(|p| matches_criteria(p, criteria))
            .cloned()
            .collect();
        sort_matches(&mut matches, criteria.sort_by);

        let total = matches.len() as i64;
        let items = matches
            .into_iter()
            .skip(criteria.offset() as usize)
            .take(criteria.limit as usize)
            .collect();

        Ok(CatalogPage { items, total })
    }

    async fn product(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }
}

fn matches_criteria(product: &Product, criteria: &FilterCriteria) -> bool {
    if criteria.min_price > 0.0 && product.price < criteria.min_price {
        return false;
    }
    if criteria.max_price < PRICE_CEILING && product.price > criteria.max_price {
        return false;
    }
    if !criteria.finishes.is_empty() && !criteria.finishes.contains(&product.finish) {
        return false;
    }
    if !criteria.categories.is_empty() && !criteria.categories.contains(&product.category) {
        return false;
    }
    if criteria.min_rating > 0.0 && product.rating < criteria.min_rating {
        return false;
    }
    if criteria.in_stock_only && !product.in_stock {
        return false;
    }
    if !criteria.search_query.is_empty() {
        let needle = criteria.search_query.to_lowercase();
        let in_name = product.name.to_lowercase().contains(&needle);
        let in_description = product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle));
        if !in_name && !in_description {
            return false;
        }
    }
    true
}

fn sort_matches(items: &mut [Product], key: SortKey) {
    match key {
        SortKey::PriceAsc => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Newest | SortKey::Relevance => {
            items.sort_by(|a, b| b.created_at.cmp(&a.created_at))
        }
    }
}

/// Narrow a listing by raw query-string values, the way the category
/// shelf does it. Filters run in order: price cap, finish set, stock.
/// Unknown keys and unknown sort values leave the listing untouched.
pub fn filter_listing(products: &[Product], params: &ListingParams) -> Vec<Product> {
    let mut listing: Vec<Product> = products.to_vec();

    if let Some(raw) = params.max_price.as_deref() {
        // An unparsable cap becomes NaN; every comparison against it is
        // false, so the listing goes empty instead of erroring.
        let cap = raw.parse::<f64>().unwrap_or(f64::NAN);
        listing.retain(|p| p.price <= cap);
    }

    if !params.finishes.is_empty() {
        listing.retain(|p| params.finishes.iter().any(|f| f == p.finish.as_str()));
    }

    if params.in_stock_only.as_deref() == Some("1") {
        listing.retain(|p| p.in_stock);
    }

    match params.sort.as_deref() {
        Some("price-asc") => listing.sort_by(|a, b| a.price.total_cmp(&b.price)),
        Some("price-desc") => listing.sort_by(|a, b| b.price.total_cmp(&a.price)),
        // Partition new arrivals to the front, keeping relative order.
        Some("newest") => listing.sort_by(|a, b| b.is_new.cmp(&a.is_new)),
        _ => {}
    }

    listing
}
