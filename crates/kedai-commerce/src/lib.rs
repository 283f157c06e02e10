//! Catalog domain types and pricing logic for Kedai.
//!
//! This crate is pure and synchronous:
//!
//! - **Money**: cents-based amounts, USD/IDR currencies, the USD to Rupiah rate
//! - **Discount**: percentage discount arithmetic
//! - **Catalog**: product records, listing pages and display cards
//! - **Cart**: cart listings returned by the remote API
//!
//! # Example
//!
//! ```
//! use kedai_commerce::prelude::*;
//!
//! assert_eq!(convert_to_rupiah(100.0), "Rp 1.543.600,00");
//! assert_eq!(count_discount(100_000.0, 20.0), 80_000.0);
//! ```

pub mod cart;
pub mod catalog;
pub mod discount;
pub mod error;
pub mod ids;
pub mod money;

pub use catalog::{set_products_cards, Product, ProductCard, ProductsResponse};
pub use discount::count_discount;
pub use error::CommerceError;
pub use ids::ProductKey;
pub use money::{convert_to_rupiah, convert_to_rupiah_at, Currency, ExchangeRate, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductKey;
    pub use crate::money::{convert_to_rupiah, convert_to_rupiah_at, Currency, ExchangeRate, Money};

    // Pricing
    pub use crate::discount::count_discount;

    // Catalog
    pub use crate::catalog::{
        set_products_cards, Product, ProductCard, ProductsResponse, DEFAULT_PAGE_SIZE,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, CartsResponse};
}
