use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Order, OrderStatus},
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

/// Turn the cart into a pending order and empty it. Orders are handed
/// to fulfilment as-is; nothing is persisted and stock is not debited.
pub fn checkout(state: &AppState) -> AppResult<ApiResponse<Order>> {
    let mut cart = cart_service::lock_cart(state)?;
    if cart.items().is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }

    let order = Order {
        id: Uuid::new_v4(),
        items: cart.items().to_vec(),
        total_amount: cart.total_price(),
        status: OrderStatus::Pending,
        created_at: Utc::now(),
    };
    cart.clear()?;

    tracing::info!(order_id = %order.id, total = order.total_amount, "checkout");

    Ok(ApiResponse::success("Checkout success", order, None))
}
