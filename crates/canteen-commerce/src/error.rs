//! Commerce error types.

use thiserror::Error;

use crate::auth::AuthError;

/// Errors that can occur in canteen operations.
///
/// Cart and favorites mutations never produce these; they are total over
/// their state.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    CartEmpty,

    /// Menu item not found.
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Form input failed validation; nothing was written.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Remote catalog request failed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Authentication failed.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

/// Reasons a menu item form is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A numeric field did not parse.
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    /// A numeric field was negative.
    #[error("{0} must not be negative")]
    Negative(&'static str),
}
