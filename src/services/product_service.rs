use uuid::Uuid;

use crate::{
    catalog::{self, CatalogBackend, DbCatalog, FilterCriteria, memory},
    dto::products::ProductList,
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::ListingParams,
    state::AppState,
};

pub async fn search_products(
    state: &AppState,
    criteria: FilterCriteria,
) -> AppResult<ApiResponse<ProductList>> {
    let backend = DbCatalog::new(&state.orm);
    let page = catalog::search(&backend, &criteria).await?;
    tracing::debug!(total = page.total, page = criteria.page, "catalog search");

    let meta = Meta::for_page(&criteria, page.total);
    let data = ProductList { items: page.items };
    Ok(ApiResponse::success("Products", data, Some(meta)))
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Product>> {
    let backend = DbCatalog::new(&state.orm);
    let result = match backend.product(id).await? {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Product", result, None))
}

pub fn shelf_listing(state: &AppState, params: &ListingParams) -> ApiResponse<ProductList> {
    let items = memory::filter_listing(&state.shelf, params);
    ApiResponse::success("Shower heads", ProductList { items }, None)
}
