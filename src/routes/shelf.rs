use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::products::ProductList,
    response::ApiResponse,
    routes::params::ListingParams,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/shower-heads", get(shower_heads))
}

#[utoipa::path(
    get,
    path = "/api/shelf/shower-heads",
    params(
        ("maxPrice" = Option<String>, Query, description = "Keep products priced at or under this cap"),
        ("finish" = Option<String>, Query, description = "Finish to include, repeatable"),
        ("inStockOnly" = Option<String>, Query, description = "\"1\" keeps only in-stock products"),
        ("sort" = Option<String>, Query, description = "price-asc, price-desc or newest"),
    ),
    responses(
        (status = 200, description = "The shower-head shelf", body = ApiResponse<ProductList>),
    ),
    tag = "Shelf"
)]
pub async fn shower_heads(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<ApiResponse<ProductList>> {
    let params = ListingParams::from_pairs(&pairs);
    Json(product_service::shelf_listing(&state, &params))
}
