//! Business logic services for storefront.
//!
//! # Services
//!
//! - `cart` - the process-wide cart store

pub mod cart;

pub use cart::CartStore;
