//! Test data builders for creating test objects

use grocery_storefront::Product;

/// Builder for creating test Products
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    pub fn new(id: u32, name: &'static str) -> Self {
        Self {
            product: Product {
                id,
                name,
                price: 1,
                unit: "kg",
                description: "",
                category: "Test",
                image: "https://example.invalid/image.png",
            },
        }
    }

    pub fn price(mut self, price: u32) -> Self {
        self.product.price = price;
        self
    }

    pub fn unit(mut self, unit: &'static str) -> Self {
        self.product.unit = unit;
        self
    }

    pub fn category(mut self, category: &'static str) -> Self {
        self.product.category = category;
        self
    }

    pub fn build(self) -> Product {
        self.product
    }
}

