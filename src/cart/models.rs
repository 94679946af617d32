//! Shopping Cart Domain Models
//!
//! This module contains the product handle and the per-product cart entry.

use super::shopping_cart::ShoppingCart;
use serde::{Serialize, Serializer};
use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Quantity used by the `*_one_*` convenience operations.
pub const DEFAULT_QUANTITY: u32 = 1;

struct ProductInner {
    name: String,
    price: AtomicU64,
}

/// A product with a fixed name and a mutable price, in cents.
///
/// `Product` is a handle: clones share the same price cell, so a cart holding
/// a clone always sees the current price. Two products are the same catalog
/// item when their names match, regardless of which handle they came from.
#[derive(Clone)]
pub struct Product {
    inner: Arc<ProductInner>,
}

impl Product {
    /// Creates a product priced in cents.
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            inner: Arc::new(ProductInner {
                name: name.into(),
                price: AtomicU64::new(price),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Current price in cents.
    pub fn price(&self) -> u64 {
        self.inner.price.load(Ordering::Relaxed)
    }

    /// Changes the price for every holder of this product, carts included.
    pub fn set_price(&self, price: u64) {
        self.inner.price.store(price, Ordering::Relaxed);
    }

    /// Adds `quantity` of this product to `cart`. Returns `self` for chaining.
    pub fn add_to_cart(&self, cart: &mut ShoppingCart, quantity: u32) -> &Self {
        cart.add_product(self, quantity);
        self
    }

    pub fn add_one_to_cart(&self, cart: &mut ShoppingCart) -> &Self {
        self.add_to_cart(cart, DEFAULT_QUANTITY)
    }

    /// Removes `quantity` of this product from `cart`. Returns `self` for chaining.
    pub fn remove_from_cart(&self, cart: &mut ShoppingCart, quantity: u32) -> &Self {
        cart.remove_product(self, quantity);
        self
    }

    pub fn remove_one_from_cart(&self, cart: &mut ShoppingCart) -> &Self {
        self.remove_from_cart(cart, DEFAULT_QUANTITY)
    }

    /// True when both handles point at the same price cell, not just the same name.
    pub fn shares_price_with(&self, other: &Product) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Debug for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Product")
            .field("name", &self.name())
            .field("price", &self.price())
            .finish()
    }
}

impl Serialize for Product {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Product", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("price", &self.price())?;
        state.end()
    }
}

/// Represents a product line in the shopping cart
#[derive(Debug, Clone, Serialize)]
pub struct CartEntry {
    /// Live handle to the product
    pub product: Product,

    /// Quantity of this product; zero only after adding 0, until the next removal
    pub quantity: u32,
}

impl CartEntry {
    /// Price × quantity at the product's current price, in cents.
    ///
    /// Saturates at `u64::MAX`, matching the saturating quantity.
    pub fn subtotal(&self) -> u64 {
        self.product.price().saturating_mul(u64::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_product_clone_shares_price() {
        let apple = Product::new("Apple", 495);
        let handle = apple.clone();

        apple.set_price(500);

        assert_eq!(handle.price(), 500, "Clones must observe price changes");
        assert!(apple.shares_price_with(&handle));
    }

    #[test]
    fn test_product_identity_is_name() {
        let a = Product::new("Apple", 495);
        let b = Product::new("Apple", 1);

        assert_eq!(a, b);
        assert!(!a.shares_price_with(&b));

        let set: HashSet<Product> = [a, b, Product::new("Orange", 399)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_product_serializes_current_price() {
        let orange = Product::new("Orange", 399);
        orange.set_price(420);

        let value = serde_json::to_value(&orange).unwrap();
        assert_eq!(value, serde_json::json!({ "name": "Orange", "price": 420 }));
    }

    #[test]
    fn test_entry_subtotal_saturates() {
        let entry = CartEntry {
            product: Product::new("Gold", 10_000_000_000),
            quantity: 2_000_000_000,
        };
        assert_eq!(entry.subtotal(), u64::MAX);
    }

    #[test]
    fn test_entry_subtotal() {
        let entry = CartEntry {
            product: Product::new("Apple", 495),
            quantity: 3,
        };
        assert_eq!(entry.subtotal(), 1485);
    }
}
