//! Product catalog
//!
//! The catalog is a fixed, ordered literal. Rendering maps it one-to-one into
//! [`ProductCard`]s: no sorting, filtering, pagination or deduplication.

use std::collections::HashSet;

use crate::error::{Result, StorefrontError};
use crate::types::Product;

/// Currency symbol shown in front of prices
pub const CURRENCY_SYMBOL: &str = "₹";

/// Delay between the entrance animations of consecutive cards, in seconds
pub const CARD_STAGGER_SECS: f64 = 0.1;

/// The shop's product list, in display order
pub static PRODUCTS: [Product; 8] = [
    Product {
        id: 1,
        name: "Premium Rice",
        price: 50,
        unit: "kg",
        description: "Fresh and high-quality long-grain rice.",
        category: "Grains",
        image: "https://picsum.photos/seed/rice/400/300",
    },
    Product {
        id: 2,
        name: "Sugar",
        price: 45,
        unit: "kg",
        description: "Pure white premium quality sugar.",
        category: "Essentials",
        image: "https://picsum.photos/seed/sugar/400/300",
    },
    Product {
        id: 3,
        name: "Cooking Oil",
        price: 120,
        unit: "litre",
        description: "Healthy refined sunflower oil for daily cooking.",
        category: "Oils",
        image: "https://picsum.photos/seed/oil/400/300",
    },
    Product {
        id: 4,
        name: "Assorted Chocolates",
        price: 10,
        unit: "piece",
        description: "Delicious chocolates for a sweet treat.",
        category: "Snacks",
        image: "https://picsum.photos/seed/chocolate/400/300",
    },
    Product {
        id: 5,
        name: "Utility Pipe",
        price: 80,
        unit: "meter",
        description: "Durable pipes for household and garden use.",
        category: "Hardware",
        image: "https://picsum.photos/seed/pipe/400/300",
    },
    Product {
        id: 6,
        name: "Wheat Flour (Atta)",
        price: 40,
        unit: "kg",
        description: "Freshly ground whole wheat flour.",
        category: "Grains",
        image: "https://picsum.photos/seed/flour/400/300",
    },
    Product {
        id: 7,
        name: "Toor Dal",
        price: 160,
        unit: "kg",
        description: "Unpolished protein-rich pulses.",
        category: "Pulses",
        image: "https://picsum.photos/seed/dal/400/300",
    },
    Product {
        id: 8,
        name: "Salt",
        price: 20,
        unit: "kg",
        description: "Iodized crystal salt.",
        category: "Essentials",
        image: "https://picsum.photos/seed/salt/400/300",
    },
];

/// The catalog as a slice
pub fn catalog() -> &'static [Product] {
    &PRODUCTS
}

/// Format a whole-rupee price for display, e.g. `₹50`
pub fn format_price(price: u32) -> String {
    format!("{}{}", CURRENCY_SYMBOL, price)
}

/// Format a unit of sale for display, e.g. `per kg`
pub fn format_unit(unit: &str) -> String {
    format!("per {}", unit)
}

/// Everything a product card displays
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Raw price, kept so callers can check it against the record
    pub price: u32,
    /// Raw unit, kept so callers can check it against the record
    pub unit: &'static str,
    pub price_label: String,
    pub unit_label: String,
    /// Entrance animation delay for this card
    pub reveal_delay: f64,
}

impl ProductCard {
    /// Build the card for a product at position `index` in the grid
    pub fn new(product: &Product, index: usize) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            description: product.description,
            image: product.image,
            price: product.price,
            unit: product.unit,
            price_label: format_price(product.price),
            unit_label: format_unit(product.unit),
            reveal_delay: index as f64 * CARD_STAGGER_SECS,
        }
    }
}

/// Produce one card per product, in list order
pub fn render_cards(products: &[Product]) -> Vec<ProductCard> {
    products
        .iter()
        .enumerate()
        .map(|(index, product)| ProductCard::new(product, index))
        .collect()
}

/// Check the catalog invariants: ids are positive and unique, prices positive
pub fn validate_catalog(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        if product.id == 0 {
            return Err(StorefrontError::Catalog {
                id: product.id,
                message: "id must be positive".to_string(),
            });
        }
        if !seen.insert(product.id) {
            return Err(StorefrontError::Catalog {
                id: product.id,
                message: "duplicate id".to_string(),
            });
        }
        if product.price == 0 {
            return Err(StorefrontError::Catalog {
                id: product.id,
                message: format!("'{}' has no price", product.name),
            });
        }
    }

    Ok(())
}
