//! Catalog API client implementation.
//!
//! Plain REST over `reqwest` with responses parsed from text for better
//! error diagnostics. Product lookups are cached via `moka`.

use std::sync::Arc;

use moka::future::Cache;
use pocket_bazaar_core::{Product, ProductId};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::CatalogError;
use super::conversions::convert_product;
use super::wire::ProductRecord;
use crate::config::CatalogConfig;

/// Cache key for the full catalog.
const CATALOG_CACHE_KEY: &str = "catalog";

/// Cached value types.
#[derive(Debug, Clone)]
enum CacheValue {
    Catalog(Arc<Vec<Product>>),
    Product(Box<Product>),
}

/// Client for the external catalog API.
///
/// Provides validated access to the product catalog. Responses are cached
/// for the TTL configured in [`CatalogConfig`].
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    products_endpoint: String,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.cache_ttl)
            .build();

        let products_endpoint = format!(
            "{}/products",
            config.base_url.as_str().trim_end_matches('/')
        );

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                products_endpoint,
                cache,
            }),
        })
    }

    /// Execute a GET against the catalog and deserialize the JSON body.
    ///
    /// The body is read as text first so parse failures can be logged with
    /// the offending payload.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(url.to_string()));
        }

        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "catalog returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: response_text.chars().take(200).collect(),
            });
        }

        // The catalog answers missing resources with an empty 200 body.
        if response_text.trim().is_empty() {
            return Err(CatalogError::NotFound(url.to_string()));
        }

        match serde_json::from_str(&response_text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "failed to parse catalog response"
                );
                Err(CatalogError::Parse(e))
            }
        }
    }

    /// Get the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or any record is malformed.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Arc<Vec<Product>>, CatalogError> {
        // Check cache
        if let Some(CacheValue::Catalog(products)) =
            self.inner.cache.get(CATALOG_CACHE_KEY).await
        {
            debug!("Cache hit for catalog");
            return Ok(products);
        }

        let records: Vec<ProductRecord> = self.fetch(&self.inner.products_endpoint).await?;

        let products: Vec<Product> = records
            .into_iter()
            .map(convert_product)
            .collect::<Result<_, _>>()?;
        let products = Arc::new(products);

        // Cache the result
        self.inner
            .cache
            .insert(
                CATALOG_CACHE_KEY.to_string(),
                CacheValue::Catalog(Arc::clone(&products)),
            )
            .await;

        Ok(products)
    }

    /// Get a single product by its catalog id.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found, the request fails, or
    /// the record is malformed.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let cache_key = format!("product:{id}");

        // Check cache
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let url = format!("{}/{id}", self.inner.products_endpoint);
        let record: Option<ProductRecord> = self.fetch(&url).await.map_err(|e| match e {
            CatalogError::NotFound(_) => {
                CatalogError::NotFound(format!("Product not found: {id}"))
            }
            other => other,
        })?;

        let record =
            record.ok_or_else(|| CatalogError::NotFound(format!("Product not found: {id}")))?;
        let product = convert_product(record)?;

        // Cache the result
        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }
}
