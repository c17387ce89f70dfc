//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                            - Product list screen
//! GET  /health                      - Health check
//!
//! # Products
//! GET  /products/{id}/quick-view    - Product detail overlay fragment (HTMX)
//!
//! # Cart
//! GET  /cart                        - Cart screen
//! POST /cart/add                    - Add to cart, then redirect to /cart
//! POST /cart/increment              - Bump quantity (returns quantity fragment)
//! POST /cart/decrement              - Drop quantity (returns quantity fragment)
//! GET  /cart/count                  - Cart count badge (fragment)
//! ```
//!
//! The navigation graph is two screens: the product list (`/`) and the
//! cart (`/cart`). The only programmatic transition is the redirect after
//! a successful add-to-cart; everything else is browser back/forward.

pub mod cart;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/{id}/quick-view", get(products::quick_view))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/increment", post(cart::increment))
        .route("/decrement", post(cart::decrement))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Product list screen
        .route("/", get(products::index))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
}
