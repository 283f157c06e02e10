//! Display cards derived from products.

use crate::catalog::Product;
use crate::discount::count_discount;
use serde::{Deserialize, Serialize};

/// Pricing and image of a product, ready for a listing tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    /// Original price.
    pub price: f64,
    /// Price with the product discount applied.
    pub after_discount: f64,
    /// Thumbnail URL.
    pub image: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            price: product.price_usd(),
            after_discount: count_discount(product.price_usd(), product.discount_percent()),
            image: product.thumbnail.clone(),
        }
    }
}

/// Shape products into cards, one per product, in the same order.
pub fn set_products_cards(products: &[Product]) -> Vec<ProductCard> {
    products.iter().map(ProductCard::from).collect()
}
