use axum::{
    Json, Router,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    catalog::FilterCriteria,
    dto::products::ProductList,
    error::AppResult,
    models::Product,
    response::ApiResponse,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", axum::routing::post(search_products))
        .route("/{id}", axum::routing::get(get_product))
}

#[utoipa::path(
    post,
    path = "/api/products/search",
    request_body = FilterCriteria,
    responses(
        (status = 200, description = "One page of matching products", body = ApiResponse<ProductList>),
        (status = 400, description = "Criteria out of range"),
    ),
    tag = "Products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    Json(criteria): Json<FilterCriteria>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let res = product_service::search_products(&state, criteria).await?;
    Ok(Json(res))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let res = product_service::get_product(&state, id).await?;
    Ok(Json(res))
}
