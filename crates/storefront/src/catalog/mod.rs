//! Catalog API client.
//!
//! The storefront reads its products from an external REST catalog:
//! `GET {base}/products` returns a JSON array of product records and
//! `GET {base}/products/{id}` returns a single record.
//!
//! # Architecture
//!
//! - The catalog is the source of truth - no local sync, direct API calls
//! - In-memory caching via `moka` for API responses (TTL from config)
//! - Raw wire records are validated into `pocket_bazaar_core::Product`
//!   before they reach the UI layer; malformed records fail with
//!   [`CatalogError::Malformed`]
//!
//! # Example
//!
//! ```rust,ignore
//! let catalog = CatalogClient::new(&config.catalog)?;
//!
//! let products = catalog.list_products().await?;
//! let product = catalog.get_product(ProductId::new(1)).await?;
//! ```

mod client;
mod conversions;
mod wire;

pub use client::CatalogClient;

use thiserror::Error;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog returned a non-success status.
    #[error("catalog returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// The response body was not valid JSON of the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A product record failed validation.
    #[error("malformed product record: {0}")]
    Malformed(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}
