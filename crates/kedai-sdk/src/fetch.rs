//! Fail-soft fetch functions.
//!
//! These never return an error. A failed or missing fetch is logged and
//! comes back as an empty record that serializes to `{}`; callers check
//! `is_empty()` instead of matching on a failure. Use [`CatalogClient`]
//! directly when the reason matters.
//!
//! [`CatalogClient`]: crate::CatalogClient

use kedai_commerce::cart::{Cart, CartsResponse};
use kedai_commerce::catalog::{Product, ProductsResponse};
use kedai_commerce::ProductKey;
use serde::{Deserialize, Serialize};

use crate::client::{CartSource, ProductSource};
use crate::outcome::FetchOutcome;

/// Stand-in for a failed fetch. Serializes to `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyRecord {}

/// Result of [`fetch_products_data`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProductsData {
    Listing(ProductsResponse),
    Detail(Product),
    Empty(EmptyRecord),
}

impl ProductsData {
    pub fn is_empty(&self) -> bool {
        matches!(self, ProductsData::Empty(_))
    }

    pub fn listing(&self) -> Option<&ProductsResponse> {
        match self {
            ProductsData::Listing(page) => Some(page),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&Product> {
        match self {
            ProductsData::Detail(product) => Some(product),
            _ => None,
        }
    }

    /// Every product carried, whichever form this is.
    pub fn products(&self) -> &[Product] {
        match self {
            ProductsData::Listing(page) => &page.products,
            ProductsData::Detail(product) => std::slice::from_ref(product),
            ProductsData::Empty(_) => &[],
        }
    }
}

/// Result of [`fetch_carts_data`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CartsData {
    Listing(CartsResponse),
    Empty(EmptyRecord),
}

impl CartsData {
    pub fn is_empty(&self) -> bool {
        matches!(self, CartsData::Empty(_))
    }

    pub fn listing(&self) -> Option<&CartsResponse> {
        match self {
            CartsData::Listing(page) => Some(page),
            CartsData::Empty(_) => None,
        }
    }

    /// Carts in server order; empty after a failed fetch.
    pub fn carts(&self) -> &[Cart] {
        match self {
            CartsData::Listing(page) => &page.carts,
            CartsData::Empty(_) => &[],
        }
    }
}

/// Fetch the default product listing, or one product when `id` is given.
pub async fn fetch_products_data<S>(source: &S, id: Option<ProductKey>) -> ProductsData
where
    S: ProductSource + ?Sized,
{
    match id {
        None => match settle(source.products().await, "/products") {
            Some(page) => ProductsData::Listing(page),
            None => ProductsData::Empty(EmptyRecord {}),
        },
        Some(key) => {
            let endpoint = format!("/products/{}", key);
            match settle(source.product(&key).await, &endpoint) {
                Some(product) => ProductsData::Detail(product),
                None => ProductsData::Empty(EmptyRecord {}),
            }
        }
    }
}

/// Fetch the cart listing.
pub async fn fetch_carts_data<S>(source: &S) -> CartsData
where
    S: CartSource + ?Sized,
{
    match settle(source.carts().await, "/carts") {
        Some(page) => CartsData::Listing(page),
        None => CartsData::Empty(EmptyRecord {}),
    }
}

fn settle<T>(outcome: FetchOutcome<T>, endpoint: &str) -> Option<T> {
    match outcome {
        FetchOutcome::Found(value) => Some(value),
        FetchOutcome::NotFound => {
            tracing::debug!(endpoint, "catalog returned not found");
            None
        }
        FetchOutcome::NetworkError(e) => {
            tracing::warn!(endpoint, reason = %e, "catalog fetch failed");
            None
        }
    }
}
