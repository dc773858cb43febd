use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    catalog::{FilterCriteria, SortKey},
    dto::{
        cart::{AddToCartRequest, CartSummary, UpdateQuantityRequest},
        products::ProductList,
    },
    models::{CartItem, Finish, Order, OrderStatus, Product},
    response::{ApiResponse, Meta},
    routes::{cart, health, orders, products as product_routes, shelf},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        product_routes::search_products,
        product_routes::get_product,
        shelf::shower_heads,
        cart::cart_summary,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        cart::clear_cart,
        orders::checkout,
    ),
    components(
        schemas(
            Product,
            Finish,
            SortKey,
            FilterCriteria,
            CartItem,
            Order,
            OrderStatus,
            AddToCartRequest,
            UpdateQuantityRequest,
            CartSummary,
            ProductList,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartSummary>,
            ApiResponse<Order>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog search endpoints"),
        (name = "Shelf", description = "Category listing endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Orders", description = "Checkout endpoint"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
