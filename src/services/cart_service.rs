use std::sync::MutexGuard;

use uuid::Uuid;

use crate::{
    cart::CartStore,
    catalog::{CatalogBackend, DbCatalog},
    dto::cart::{AddToCartRequest, CartSummary, UpdateQuantityRequest},
    error::{AppError, AppResult},
    response::ApiResponse,
    state::AppState,
};

// A poisoned lock means a writer panicked mid-mutation.
pub(crate) fn lock_cart(state: &AppState) -> AppResult<MutexGuard<'_, CartStore>> {
    state
        .cart
        .lock()
        .map_err(|_| AppError::Internal(anyhow::anyhow!("cart lock poisoned")))
}

fn summary_of(cart: &CartStore) -> CartSummary {
    CartSummary {
        items: cart.items().to_vec(),
        total_price: cart.total_price(),
        item_count: cart.item_count(),
    }
}

pub fn cart_summary(state: &AppState) -> AppResult<ApiResponse<CartSummary>> {
    let cart = lock_cart(state)?;
    Ok(ApiResponse::success("OK", summary_of(&cart), None))
}

pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartSummary>> {
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    // Snapshot the product before taking the lock; the guard cannot be
    // held across an await.
    let backend = DbCatalog::new(&state.orm);
    let product = match backend.product(payload.product_id).await? {
        Some(p) => p,
        None => return Err(AppError::BadRequest("product not found".to_string())),
    };

    let mut cart = lock_cart(state)?;
    cart.add_item(payload.product_id, payload.quantity, Some(product))?;
    Ok(ApiResponse::success(
        "Added to cart",
        summary_of(&cart),
        None,
    ))
}

pub fn update_quantity(
    state: &AppState,
    product_id: Uuid,
    payload: UpdateQuantityRequest,
) -> AppResult<ApiResponse<CartSummary>> {
    let mut cart = lock_cart(state)?;
    cart.update_quantity(product_id, payload.quantity)?;
    Ok(ApiResponse::success("OK", summary_of(&cart), None))
}

pub fn remove_from_cart(
    state: &AppState,
    product_id: Uuid,
) -> AppResult<ApiResponse<CartSummary>> {
    let mut cart = lock_cart(state)?;
    cart.remove_item(product_id)?;
    Ok(ApiResponse::success(
        "Removed from cart",
        summary_of(&cart),
        None,
    ))
}

pub fn clear_cart(state: &AppState) -> AppResult<ApiResponse<CartSummary>> {
    let mut cart = lock_cart(state)?;
    cart.clear()?;
    Ok(ApiResponse::success("Cart cleared", summary_of(&cart), None))
}
