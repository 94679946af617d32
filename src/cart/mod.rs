//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (Product, CartEntry)
//! - The cart itself and its serializable snapshot
//! - Formatting and session id helpers
//! - Per-session cart state

pub mod helpers;
pub mod models;
pub mod shopping_cart;
pub mod snapshot;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{CartEntry, Product, DEFAULT_QUANTITY};
pub use shopping_cart::ShoppingCart;
pub use snapshot::{CartLine, CartSnapshot};
pub use state::{CartSessions, SharedSessions};
