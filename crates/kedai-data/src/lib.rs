//! HTTP client utilities for Kedai.
//!
//! A small builder API over `reqwest` for issuing GET requests against a
//! JSON API. Every `send` performs exactly one request: there is no retry,
//! no caching and no timeout beyond what the transport imposes.
//!
//! # Example
//!
//! ```rust,ignore
//! use kedai_data::FetchClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Product {
//!     id: u64,
//!     price: f64,
//! }
//!
//! let client = FetchClient::new().with_base_url("https://dummyjson.com");
//!
//! let product: Product = client
//!     .get("/products/1")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod response;

pub use error::FetchError;
pub use request::RequestBuilder;
pub use response::Response;

use std::collections::HashMap;

/// HTTP client for making outbound requests.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    ///
    /// Relative paths are joined to the base URL with exactly one `/`.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !is_absolute(&url) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                url.trim_start_matches('/')
            ),
            _ => url,
        };

        let mut builder = RequestBuilder::new(full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            http: self.http.clone(),
            builder,
        }
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    http: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.builder = self.builder.query(key, value);
        self
    }

    /// Send the request and read the whole response body.
    ///
    /// Non-2xx statuses are returned as a `Response`, not an error; use
    /// [`Response::error_for_status`] to reject them.
    pub async fn send(self) -> Result<Response, FetchError> {
        let url = self.builder.build_url()?;
        tracing::debug!(method = "GET", url = %url, "sending request");

        let mut request = self.http.get(url.clone());
        for (key, value) in &self.builder.headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(url = %url, status, bytes = body.len(), "received response");
        Ok(Response::new(status, headers, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Response};
}
