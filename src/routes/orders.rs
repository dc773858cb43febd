use axum::{Json, Router, extract::State, routing::post};

use crate::{
    error::AppResult, models::Order, response::ApiResponse, services::order_service,
    state::AppState,
};

pub fn route() -> Router<AppState> {
    Router::new().route("/checkout", post(checkout))
}

#[utoipa::path(
    post,
    path = "/api/orders/checkout",
    responses(
        (status = 200, description = "Order built from the cart", body = ApiResponse<Order>),
        (status = 400, description = "Cart is empty"),
    ),
    tag = "Orders"
)]
pub async fn checkout(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Order>>> {
    let res = order_service::checkout(&state)?;
    Ok(Json(res))
}
