//! Product catalog module.
//!
//! Contains product records as served by the catalog API and the
//! display cards derived from them.

mod card;
mod product;

pub use card::{set_products_cards, ProductCard};
pub use product::{Product, ProductsResponse, DEFAULT_PAGE_SIZE};
