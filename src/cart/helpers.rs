//! Shopping Cart Helpers
//!
//! This module contains helper functions for session ids and formatting.

use super::shopping_cart::ShoppingCart;
use uuid::Uuid;

/// Picks the id a session is stored under.
///
/// A caller resuming a session passes its id back unchanged; a new shopper
/// gets a random 32-character hex id.
pub fn get_or_create_session_id(session_id: Option<String>) -> String {
    session_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Produces a human-readable one-line summary of a cart, sorted by name.
///
/// Example output: `"2x Apple, 1x Orange"`.
pub fn format_item_summary(cart: &ShoppingCart) -> String {
    let mut lines: Vec<(&str, u32)> = cart
        .entries()
        .map(|e| (e.product.name(), e.quantity))
        .collect();
    lines.sort_unstable_by_key(|(name, _)| *name);

    lines
        .iter()
        .map(|(name, quantity)| format!("{}x {}", quantity, name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a cents amount as dollars, e.g. `1389` -> `"$13.89"`.
pub fn format_dollars(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
