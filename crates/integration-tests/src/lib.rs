//! Integration tests for Pocket Bazaar.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront
//! cargo run -p pocket-bazaar-storefront
//!
//! # Run integration tests against it
//! cargo test -p pocket-bazaar-integration-tests -- --ignored
//! ```
//!
//! The tests talk to the server over HTTP and assert on rendered HTML, so
//! they need the external catalog API to be reachable as well. The base
//! URL defaults to `http://localhost:3000` and can be overridden with
//! `STOREFRONT_BASE_URL`.

#![cfg_attr(not(test), forbid(unsafe_code))]
