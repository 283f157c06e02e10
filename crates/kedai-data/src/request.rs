//! HTTP request builder.

use crate::FetchError;
use reqwest::Url;
use std::collections::HashMap;

/// A builder for constructing GET requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query: Vec<(String, String)>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            query: Vec::new(),
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Resolve the final URL, query string included.
    pub fn build_url(&self) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", self.url, e)))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_plain() {
        let url = RequestBuilder::new("https://dummyjson.com/products")
            .build_url()
            .unwrap();
        assert_eq!(url.as_str(), "https://dummyjson.com/products");
    }

    #[test]
    fn test_build_url_with_query() {
        let url = RequestBuilder::new("https://dummyjson.com/products")
            .query("limit", 30)
            .query("skip", 60)
            .build_url()
            .unwrap();
        assert_eq!(url.as_str(), "https://dummyjson.com/products?limit=30&skip=60");
    }

    #[test]
    fn test_build_url_invalid() {
        let err = RequestBuilder::new("not a url").build_url().unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(msg) if msg.starts_with("not a url")));
    }

    #[test]
    fn test_header_replaces_same_name() {
        let builder = RequestBuilder::new("https://dummyjson.com")
            .header("Accept", "text/html")
            .header("Accept", "application/json");
        assert_eq!(builder.headers.len(), 1);
        assert_eq!(
            builder.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }
}
