//! Raw wire types for the catalog API.
//!
//! These mirror the JSON the external endpoint actually returns. They are
//! converted into core domain types, with validation, in `conversions` -
//! nothing outside the catalog module sees a raw record.

use serde::Deserialize;

/// A raw product record as returned by the catalog endpoint.
///
/// Fields the storefront does not use (category, rating) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ProductRecord {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
}
