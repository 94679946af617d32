//! Shopping Cart Library
//!
//! Products with a fixed name and a live price, and carts that total them on
//! demand.

// Domain modules
pub mod cart;

// Infrastructure
pub mod config;
pub mod error;

pub use cart::{CartSessions, Product, ShoppingCart};
pub use error::{CartError, Result};
