//! Shopping Cart Session State
//!
//! Keeps one cart per session so that concurrent shoppers never see each
//! other's entries. Products may still be shared between sessions.

use super::{
    helpers::{format_item_summary, get_or_create_session_id},
    shopping_cart::ShoppingCart,
};
use crate::error::{CartError, Result};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::info;

// =============================================================================
// Session State
// =============================================================================

/// Session store that can be safely passed between threads
pub type SharedSessions = Arc<CartSessions>;

/// Carts keyed by session id
#[derive(Debug, Default)]
pub struct CartSessions {
    /// DashMap allows concurrent access without external Mutexes.
    carts: DashMap<String, ShoppingCart>,
}

impl CartSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a cart for `session_id`, generating an id when `None`.
    ///
    /// An already open session keeps its cart untouched.
    pub fn open(&self, session_id: Option<String>) -> String {
        let session_id = get_or_create_session_id(session_id);
        self.carts
            .entry(session_id.clone())
            .or_insert_with(|| {
                info!(session = %session_id, "cart opened");
                ShoppingCart::new()
            });
        session_id
    }

    /// Runs `f` against the session's cart.
    pub fn with_cart<R>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut ShoppingCart) -> R,
    ) -> Result<R> {
        let mut cart = self
            .carts
            .get_mut(session_id)
            .ok_or_else(|| CartError::UnknownSession(session_id.to_owned()))?;
        Ok(f(cart.value_mut()))
    }

    /// Total of the session's cart, in cents.
    pub fn total_price(&self, session_id: &str) -> Result<u64> {
        self.carts
            .get(session_id)
            .map(|cart| cart.total_price())
            .ok_or_else(|| CartError::UnknownSession(session_id.to_owned()))
    }

    pub fn summary(&self, session_id: &str) -> Result<String> {
        self.carts
            .get(session_id)
            .map(|cart| format_item_summary(&cart))
            .ok_or_else(|| CartError::UnknownSession(session_id.to_owned()))
    }

    /// Closes the session and hands back its cart.
    pub fn close(&self, session_id: &str) -> Result<ShoppingCart> {
        let (_, cart) = self
            .carts
            .remove(session_id)
            .ok_or_else(|| CartError::UnknownSession(session_id.to_owned()))?;

        info!(
            session = %session_id,
            items = %format_item_summary(&cart),
            total = cart.total_price(),
            "cart closed"
        );
        Ok(cart)
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}
