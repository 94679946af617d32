//! Serializable, point-in-time view of a cart.

use super::models::CartEntry;
use serde::{Deserialize, Serialize};

/// One product line as it stood when the snapshot was taken
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub name: String,

    /// Unit price in cents
    pub price: u64,

    pub quantity: u32,

    /// `price * quantity` in cents, saturating
    pub subtotal: u64,
}

impl From<&CartEntry> for CartLine {
    fn from(entry: &CartEntry) -> Self {
        let price = entry.product.price();
        Self {
            name: entry.product.name().to_owned(),
            price,
            quantity: entry.quantity,
            subtotal: price.saturating_mul(u64::from(entry.quantity)),
        }
    }
}

/// Cart contents copied out of the live cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Lines sorted by product name
    pub items: Vec<CartLine>,

    pub total_cents: u64,

    pub total_dollars: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::models::Product;
    use serde_json::json;

    #[test]
    fn test_line_from_entry() {
        let entry = CartEntry {
            product: Product::new("Orange", 399),
            quantity: 3,
        };

        let line = CartLine::from(&entry);
        assert_eq!(line.subtotal, 1197);
        assert_eq!(line.name, "Orange");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = CartSnapshot {
            items: vec![CartLine {
                name: "Apple".into(),
                price: 495,
                quantity: 2,
                subtotal: 990,
            }],
            total_cents: 990,
            total_dollars: 9.9,
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            value,
            json!({
                "items": [{ "name": "Apple", "price": 495, "quantity": 2, "subtotal": 990 }],
                "totalCents": 990,
                "totalDollars": 9.9
            })
        );

        let back: CartSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(back, snapshot);
    }
}
