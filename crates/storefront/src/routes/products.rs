//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use pocket_bazaar_core::{Product, ProductId};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            image: product.image.clone(),
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
    pub fetch_failed: bool,
}

/// Product detail overlay fragment template (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/quick_view.html")]
pub struct QuickViewTemplate {
    pub product: ProductView,
    pub quantity: u32,
}

/// Display the product list screen.
///
/// On catalog failure the screen renders with an error banner and an
/// empty list; the failure stays local to this screen.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let (products, fetch_failed) = match state.catalog().list_products().await {
        Ok(products) => (products.iter().map(ProductView::from).collect(), false),
        Err(e) => {
            tracing::warn!("Failed to fetch catalog: {e}");
            (Vec::new(), true)
        }
    };

    ProductsIndexTemplate {
        products,
        fetch_failed,
    }
}

/// Display the product detail overlay fragment (HTMX).
///
/// The quantity is read live from the cart store, 0 if the product has
/// not been added yet.
#[instrument(skip(state))]
pub async fn quick_view(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<QuickViewTemplate> {
    let id = ProductId::new(id);
    let product = state.catalog().get_product(id).await?;
    let quantity = state.cart().quantity_of(id).await.unwrap_or(0);

    Ok(QuickViewTemplate {
        product: ProductView::from(&product),
        quantity,
    })
}

#[cfg(test)]
mod tests {
    use pocket_bazaar_core::{CurrencyCode, Price};
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_product_view_formats_price() {
        let product = Product {
            id: ProductId::new(1),
            title: "Shirt".to_string(),
            description: "A shirt".to_string(),
            price: Price::new(Decimal::new(999, 2), CurrencyCode::USD),
            image: "https://example.com/shirt.png".to_string(),
        };

        let view = ProductView::from(&product);
        assert_eq!(view.id, 1);
        assert_eq!(view.price, "$9.99");
    }
}
