//! The cart store service.
//!
//! A single process-wide cart: nothing is persisted and there is no
//! per-user separation. The store is the only writer of the underlying
//! [`CartState`] and exposes exactly the three cart mutations plus read
//! accessors, so every quantity shown anywhere is computed from one place.

use std::sync::Arc;

use pocket_bazaar_core::{CartState, Product, ProductId};
use tokio::sync::RwLock;

/// Shared handle to the process-wide cart.
///
/// Cheaply cloneable; all handlers operate on the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    inner: Arc<RwLock<CartState>>,
}

impl CartStore {
    /// Create an empty cart store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product with quantity 1; no-op if it is already in the cart.
    pub async fn add_item(&self, product: Product) {
        self.inner.write().await.add_item(product);
    }

    /// Increase a product's quantity by one; no-op if absent.
    pub async fn increment_quantity(&self, id: ProductId) {
        self.inner.write().await.increment_quantity(id);
    }

    /// Decrease a product's quantity by one, stopping at zero; no-op if
    /// absent.
    pub async fn decrement_quantity(&self, id: ProductId) {
        self.inner.write().await.decrement_quantity(id);
    }

    /// The quantity for a product, or `None` if it is not in the cart.
    pub async fn quantity_of(&self, id: ProductId) -> Option<u32> {
        self.inner.read().await.quantity_of(id)
    }

    /// Total number of units across all entries.
    pub async fn total_quantity(&self) -> u64 {
        self.inner.read().await.total_quantity()
    }

    /// A point-in-time copy of the cart contents.
    pub async fn snapshot(&self) -> CartState {
        self.inner.read().await.clone()
    }
}
