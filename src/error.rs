//! Error types for the session layer.
//!
//! Cart operations themselves never fail; only looking up a session can.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("no cart is open for session `{0}`")]
    UnknownSession(String),
}

pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = CartError::UnknownSession("abc".into());
        assert_eq!(err.to_string(), "no cart is open for session `abc`");
    }
}
