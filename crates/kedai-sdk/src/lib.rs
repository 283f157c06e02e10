//! # Kedai SDK
//!
//! Fetches products and carts from a dummyjson-style catalog API and
//! prepares them for an Indonesian storefront.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kedai_sdk::prelude::*;
//!
//! let client = CatalogClient::new(&CatalogConfig::default());
//!
//! // Fail-soft: an unknown id yields an empty record, never an error.
//! let data = fetch_products_data(&client, None).await;
//! for card in set_products_cards(data.products()) {
//!     println!("{} -> {}", convert_to_rupiah(card.price), convert_to_rupiah(card.after_discount));
//! }
//!
//! // Typed: the reason for a failure is kept.
//! match client.product(&ProductKey::from(1)).await {
//!     FetchOutcome::Found(product) => println!("{:?}", product.title()),
//!     FetchOutcome::NotFound => println!("no such product"),
//!     FetchOutcome::NetworkError(e) => eprintln!("catalog unavailable: {}", e),
//! }
//! ```
//!
//! ## Crates
//!
//! - `kedai-commerce`: products, carts, money, discounts, cards
//! - `kedai-data`: the HTTP client underneath

mod client;
pub mod config;
mod fetch;
mod outcome;

pub use client::{CartSource, CatalogClient, Page, ProductSource};
pub use config::CatalogConfig;
pub use fetch::{fetch_carts_data, fetch_products_data, CartsData, EmptyRecord, ProductsData};
pub use outcome::FetchOutcome;

// Re-export the pure pricing and display functions
pub use kedai_commerce::{
    convert_to_rupiah, convert_to_rupiah_at, count_discount, set_products_cards,
};

// Re-export member crates
pub use kedai_commerce;
pub use kedai_data;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        fetch_carts_data, fetch_products_data, CartSource, CartsData, CatalogClient,
        CatalogConfig, FetchOutcome, Page, ProductSource, ProductsData,
    };
    pub use kedai_commerce::prelude::*;
    pub use kedai_data::FetchError;
}
