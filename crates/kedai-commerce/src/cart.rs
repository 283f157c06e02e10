//! Cart listings as served by the carts endpoint.
//!
//! Carts are read-only here: they are decoded, handed to the caller and
//! never recomputed. Amounts stay `serde_json::Number` so integers and
//! decimals are written back exactly as received. Fields the API may omit
//! are optional; anything not modelled is preserved in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A product line inside a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: u64,
    pub title: String,
    /// Unit price in USD.
    pub price: Number,
    pub quantity: u64,
    /// `price * quantity`, as computed by the API.
    pub total: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discounted_total: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A customer cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: u64,
    /// Lines in the order the API returned them.
    pub products: Vec<CartLine>,
    /// Cart total in USD before discounts.
    pub total: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discounted_total: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_products: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_quantity: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cart {
    /// Sum of line quantities.
    pub fn item_count(&self) -> u64 {
        self.products.iter().map(|line| line.quantity).sum()
    }
}

/// One page of the cart listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartsResponse {
    pub carts: Vec<Cart>,
    /// Number of carts on the server.
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

impl CartsResponse {
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}
