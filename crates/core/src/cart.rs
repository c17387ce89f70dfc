//! The cart state machine.
//!
//! [`CartState`] is an ordered list of [`CartEntry`] values keyed by
//! [`ProductId`]. It exposes exactly three mutations - add, increment,
//! decrement - plus read accessors. All operations are synchronous,
//! deterministic, and total.
//!
//! Invariants:
//! - at most one entry per product id
//! - entries keep the order in which they were first added; quantity
//!   changes never reorder
//! - quantities never go below zero (decrement saturates; the entry stays
//!   in the cart since no remove operation exists)

use serde::{Deserialize, Serialize};

use crate::types::{Product, ProductId};

/// A product in the cart together with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// The catalog product this entry refers to.
    pub product: Product,
    /// Number of units. Saturates at zero on decrement.
    pub quantity: u32,
}

/// Ordered cart contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    entries: Vec<CartEntry>,
}

impl CartState {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a product to the cart with quantity 1.
    ///
    /// If an entry for the product already exists this is a no-op: repeat
    /// adds do not bump the quantity.
    pub fn add_item(&mut self, product: Product) {
        if self.quantity_of(product.id).is_some() {
            return;
        }
        self.entries.push(CartEntry {
            product,
            quantity: 1,
        });
    }

    /// Increase the quantity of the entry with `id` by one.
    ///
    /// No-op if the product is not in the cart.
    pub fn increment_quantity(&mut self, id: ProductId) {
        if let Some(entry) = self.entry_mut(id) {
            entry.quantity = entry.quantity.saturating_add(1);
        }
    }

    /// Decrease the quantity of the entry with `id` by one, stopping at
    /// zero.
    ///
    /// No-op if the product is not in the cart. The entry is retained at
    /// quantity zero.
    pub fn decrement_quantity(&mut self, id: ProductId) {
        if let Some(entry) = self.entry_mut(id) {
            entry.quantity = entry.quantity.saturating_sub(1);
        }
    }

    /// The quantity for a product, or `None` if it is not in the cart.
    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.product.id == id)
            .map(|entry| entry.quantity)
    }

    /// The cart entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.quantity))
            .sum()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct entries in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn entry_mut(&mut self, id: ProductId) -> Option<&mut CartEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.product.id == id)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{CurrencyCode, Price};

    fn product(id: i64, title: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: format!("{title} description"),
            price: Price::new(Decimal::new(999, 2), CurrencyCode::USD),
            image: "https://example.com/img.png".to_string(),
        }
    }

    #[test]
    fn test_add_inserts_with_quantity_one() {
        let mut cart = CartState::new();
        cart.add_item(product(1, "Shirt"));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(1));
    }

    #[test]
    fn test_duplicate_add_is_idempotent() {
        let mut cart = CartState::new();
        cart.add_item(product(1, "Shirt"));
        cart.increment_quantity(ProductId::new(1));
        cart.add_item(product(1, "Shirt"));

        // Exactly one entry, and the repeat add did not touch the quantity.
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(2));
    }

    #[test]
    fn test_increment_then_decrement_round_trips() {
        let mut cart = CartState::new();
        cart.add_item(product(1, "Shirt"));
        let before = cart.clone();

        cart.increment_quantity(ProductId::new(1));
        cart.decrement_quantity(ProductId::new(1));

        assert_eq!(cart, before);
    }

    #[test]
    fn test_mutations_no_op_on_absent_entries() {
        let mut cart = CartState::new();
        cart.add_item(product(1, "Shirt"));
        let before = cart.clone();

        cart.increment_quantity(ProductId::new(99));
        cart.decrement_quantity(ProductId::new(99));

        assert_eq!(cart, before);
        assert_eq!(cart.quantity_of(ProductId::new(99)), None);
    }

    #[test]
    fn test_ordering_stable_under_quantity_changes() {
        let mut cart = CartState::new();
        cart.add_item(product(3, "Hat"));
        cart.add_item(product(1, "Shirt"));
        cart.add_item(product(2, "Mug"));

        cart.increment_quantity(ProductId::new(2));
        cart.increment_quantity(ProductId::new(2));
        cart.decrement_quantity(ProductId::new(3));

        let ids: Vec<i64> = cart
            .entries()
            .iter()
            .map(|entry| entry.product.id.as_i64())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let mut cart = CartState::new();
        cart.add_item(product(1, "Shirt"));

        // Three decrements from quantity 1: clamp at zero, entry retained.
        cart.decrement_quantity(ProductId::new(1));
        cart.decrement_quantity(ProductId::new(1));
        cart.decrement_quantity(ProductId::new(1));

        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(0));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_quantity_sums_entries() {
        let mut cart = CartState::new();
        cart.add_item(product(1, "Shirt"));
        cart.add_item(product(2, "Mug"));
        cart.increment_quantity(ProductId::new(2));

        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_empty_cart() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.len(), 0);
    }
}
