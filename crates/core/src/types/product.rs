//! The immutable catalog product record.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product from the remote catalog.
///
/// Instances are created only by the catalog client's validated conversion
/// and are immutable for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier (unique and stable per catalog).
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Plain text description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image URL.
    pub image: String,
}
