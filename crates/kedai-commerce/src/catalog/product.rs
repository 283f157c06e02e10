//! Product records and listing pages.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Page size the catalog API applies when none is requested.
pub const DEFAULT_PAGE_SIZE: u64 = 30;

/// A product as returned by the catalog API.
///
/// Only the fields pricing and display depend on are typed. Everything
/// else the API sends (title, brand, rating, ...) is kept in `extra` and
/// written back unchanged on serialization. Numbers keep their wire form,
/// so `20` stays `20` rather than becoming `20.0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog product id.
    pub id: u64,
    /// Price in USD.
    pub price: Number,
    /// Discount in percent (0-100).
    pub discount_percentage: Number,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Remaining fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Decode a product from an arbitrary JSON value.
    pub fn from_value(value: Value) -> Result<Self, CommerceError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Price in USD as a float.
    pub fn price_usd(&self) -> f64 {
        self.price.as_f64().unwrap_or_default()
    }

    /// Discount percentage as a float.
    pub fn discount_percent(&self) -> f64 {
        self.discount_percentage.as_f64().unwrap_or_default()
    }

    /// Look up a pass-through field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// The product title, when the API sent one.
    pub fn title(&self) -> Option<&str> {
        self.field("title").and_then(Value::as_str)
    }
}

/// One page of the product listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    /// Total products in the catalog, across all pages.
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

impl ProductsResponse {
    /// Number of products on this page.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Find a product on this page by id.
    pub fn product(&self, id: u64) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }
}
