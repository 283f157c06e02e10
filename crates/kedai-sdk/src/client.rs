//! Typed access to the product and cart endpoints.

use async_trait::async_trait;
use kedai_commerce::cart::CartsResponse;
use kedai_commerce::catalog::{Product, ProductsResponse, DEFAULT_PAGE_SIZE};
use kedai_commerce::{convert_to_rupiah_at, ExchangeRate, ProductKey};
use kedai_data::{ClientRequestBuilder, FetchClient, FetchError};
use serde::de::DeserializeOwned;

use crate::config::CatalogConfig;
use crate::outcome::FetchOutcome;

/// A single page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub skip: u64,
}

impl Page {
    pub fn new(limit: u64, skip: u64) -> Self {
        Self { limit, skip }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 0)
    }
}

/// Anything that can serve product listings and details.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// The default product listing.
    async fn products(&self) -> FetchOutcome<ProductsResponse>;

    /// A single product by key.
    async fn product(&self, key: &ProductKey) -> FetchOutcome<Product>;
}

/// Anything that can serve the cart listing.
#[async_trait]
pub trait CartSource: Send + Sync {
    async fn carts(&self) -> FetchOutcome<CartsResponse>;
}

/// Client for the remote catalog API.
///
/// Each method issues at most one GET request.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    fetch: FetchClient,
    rate: ExchangeRate,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Self {
        let fetch = FetchClient::new()
            .with_base_url(config.base_url.clone())
            .with_default_header("User-Agent", config.user_agent.clone())
            .with_default_header("Accept", "application/json");

        Self {
            fetch,
            rate: config.exchange_rate(),
        }
    }

    /// Client configured from `KEDAI_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(&CatalogConfig::from_env()?))
    }

    pub fn exchange_rate(&self) -> &ExchangeRate {
        &self.rate
    }

    /// Format a USD price as Rupiah at this client's rate.
    pub fn price_in_rupiah(&self, usd: f64) -> String {
        convert_to_rupiah_at(usd, &self.rate)
    }

    /// `GET /products` with no paging parameters; the server picks the page size.
    pub async fn products(&self) -> FetchOutcome<ProductsResponse> {
        get_json(self.fetch.get("/products")).await.into()
    }

    /// `GET /products?limit=..&skip=..`.
    pub async fn products_page(&self, page: Page) -> FetchOutcome<ProductsResponse> {
        let request = self
            .fetch
            .get("/products")
            .query("limit", page.limit)
            .query("skip", page.skip);
        get_json(request).await.into()
    }

    /// `GET /products/{key}`.
    ///
    /// Keys that cannot form a path segment are `NotFound` without a request.
    pub async fn product(&self, key: &ProductKey) -> FetchOutcome<Product> {
        let Some(segment) = key.path_segment() else {
            tracing::debug!(key = %key, "product key has no path segment");
            return FetchOutcome::NotFound;
        };
        let path = format!("/products/{}", segment);
        get_json(self.fetch.get(path)).await.into()
    }

    /// `GET /carts`.
    pub async fn carts(&self) -> FetchOutcome<CartsResponse> {
        get_json(self.fetch.get("/carts")).await.into()
    }
}

async fn get_json<T: DeserializeOwned>(request: ClientRequestBuilder) -> Result<T, FetchError> {
    request.send().await?.error_for_status()?.json()
}

#[async_trait]
impl ProductSource for CatalogClient {
    async fn products(&self) -> FetchOutcome<ProductsResponse> {
        CatalogClient::products(self).await
    }

    async fn product(&self, key: &ProductKey) -> FetchOutcome<Product> {
        CatalogClient::product(self, key).await
    }
}

#[async_trait]
impl CartSource for CatalogClient {
    async fn carts(&self) -> FetchOutcome<CartsResponse> {
        CatalogClient::carts(self).await
    }
}
