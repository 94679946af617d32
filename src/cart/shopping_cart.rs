//! The shopping cart itself.
//!
//! Entries are keyed by product name and hold a live handle to the product,
//! so the total is always recomputed from current prices.

use super::{
    models::{CartEntry, Product},
    snapshot::{CartLine, CartSnapshot},
};
use std::collections::HashMap;
use tracing::debug;

/// A mapping from product name to `(product, quantity)`.
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    entries: HashMap<String, CartEntry>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_product(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Quantity held for `name`, or `None` when the product is not in the cart.
    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.entries.get(name).map(|entry| entry.quantity)
    }

    /// Adds `quantity` of `product`, creating the entry on first use.
    ///
    /// The entry keeps the product handle it was created with; later adds
    /// under the same name only change the quantity.
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> &mut Self {
        let entry = self
            .entries
            .entry(product.name().to_owned())
            .or_insert_with(|| CartEntry {
                product: product.clone(),
                quantity: 0,
            });
        if !entry.product.shares_price_with(product) {
            debug!(
                product = product.name(),
                tracked_price = entry.product.price(),
                ignored_price = product.price(),
                "same name, different handle; keeping the stored price"
            );
        }
        entry.quantity = entry.quantity.saturating_add(quantity);

        debug!(
            product = product.name(),
            added = quantity,
            quantity = entry.quantity,
            "added to cart"
        );
        self
    }

    /// Removes `quantity` of `product`.
    ///
    /// Removing as many as are held, or more, deletes the entry. Removing a
    /// product that is not in the cart does nothing.
    pub fn remove_product(&mut self, product: &Product, quantity: u32) -> &mut Self {
        let Some(entry) = self.entries.get_mut(product.name()) else {
            debug!(product = product.name(), "remove ignored, not in cart");
            return self;
        };

        if quantity < entry.quantity {
            entry.quantity -= quantity;
            debug!(
                product = product.name(),
                removed = quantity,
                quantity = entry.quantity,
                "removed from cart"
            );
        } else {
            self.entries.remove(product.name());
            debug!(product = product.name(), removed = quantity, "cleared from cart");
        }
        self
    }

    /// Empties the cart.
    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self
    }

    /// Total in cents, computed from current product prices.
    ///
    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn total_price(&self) -> u64 {
        self.entries
            .values()
            .map(CartEntry::subtotal)
            .fold(0, u64::saturating_add)
    }

    /// Total in dollars. Conversion happens only here; cents stay exact.
    pub fn total_price_in_dollars(&self) -> f64 {
        self.total_price() as f64 / 100.0
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    /// Copies the current contents into a serializable view, sorted by name.
    pub fn snapshot(&self) -> CartSnapshot {
        let mut items: Vec<CartLine> = self.entries().map(CartLine::from).collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));

        let total_cents = self.total_price();
        CartSnapshot {
            items,
            total_cents,
            total_dollars: total_cents as f64 / 100.0,
        }
    }
}
