//! Cart route handlers.
//!
//! Quantity changes use HTMX fragments so the pressed control updates in
//! place; "Add to Cart" is a regular form post that redirects to the cart
//! screen (the one programmatic screen transition in the app).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use pocket_bazaar_core::{CartState, ProductId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i64,
    pub title: String,
    pub quantity: u32,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u64,
}

impl From<&CartState> for CartView {
    fn from(cart: &CartState) -> Self {
        Self {
            items: cart
                .entries()
                .iter()
                .map(|entry| CartItemView {
                    id: entry.product.id.as_i64(),
                    title: entry.product.title.clone(),
                    quantity: entry.quantity,
                })
                .collect(),
            item_count: cart.total_quantity(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i64,
}

/// Quantity change form data.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub product_id: i64,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Quantity fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/quantity.html")]
pub struct QuantityTemplate {
    pub product_id: i64,
    pub quantity: u32,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Display the cart screen.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.cart().snapshot().await;

    CartShowTemplate {
        cart: CartView::from(&snapshot),
    }
}

/// Add a product to the cart, then navigate to the cart screen.
///
/// The product is fetched from the catalog so only known products can be
/// added. Repeat adds are a no-op: the cart keeps one entry per product
/// and does not bump the quantity.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let id = ProductId::new(form.product_id);
    let product = state.catalog().get_product(id).await?;

    state.cart().add_item(product).await;

    Ok(Redirect::to("/cart"))
}

/// Increase an entry's quantity by one (HTMX).
///
/// No-ops when the product has not been added to the cart yet; the
/// returned quantity is unchanged in that case.
#[instrument(skip(state))]
pub async fn increment(
    State(state): State<AppState>,
    Form(form): Form<QuantityForm>,
) -> Response {
    let id = ProductId::new(form.product_id);
    state.cart().increment_quantity(id).await;

    quantity_fragment(&state, id).await
}

/// Decrease an entry's quantity by one, stopping at zero (HTMX).
#[instrument(skip(state))]
pub async fn decrement(
    State(state): State<AppState>,
    Form(form): Form<QuantityForm>,
) -> Response {
    let id = ProductId::new(form.product_id);
    state.cart().decrement_quantity(id).await;

    quantity_fragment(&state, id).await
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart().total_quantity().await,
    }
}

/// Render the quantity fragment with a trigger to refresh the badge.
async fn quantity_fragment(state: &AppState, id: ProductId) -> Response {
    let quantity = state.cart().quantity_of(id).await.unwrap_or(0);

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        QuantityTemplate {
            product_id: id.as_i64(),
            quantity,
        },
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use pocket_bazaar_core::{CurrencyCode, Price, Product};
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: i64, title: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: String::new(),
            price: Price::new(Decimal::new(500, 2), CurrencyCode::USD),
            image: "https://example.com/img.png".to_string(),
        }
    }

    #[test]
    fn test_cart_view_keeps_insertion_order() {
        let mut cart = CartState::new();
        cart.add_item(product(2, "Mug"));
        cart.add_item(product(1, "Shirt"));
        cart.increment_quantity(ProductId::new(1));

        let view = CartView::from(&cart);
        let titles: Vec<&str> = view.items.iter().map(|item| item.title.as_str()).collect();

        assert_eq!(titles, vec!["Mug", "Shirt"]);
        assert_eq!(view.item_count, 3);
    }

    #[test]
    fn test_cart_view_empty() {
        let cart = CartState::new();
        let view = CartView::from(&cart);

        assert!(view.items.is_empty());
        assert_eq!(view.item_count, 0);
    }
}
