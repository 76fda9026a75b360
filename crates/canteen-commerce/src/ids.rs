//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a CategoryId where an ItemId is expected.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ItemId);
define_id!(CategoryId);
define_id!(OrderId);
define_id!(UserId);

/// Number of digits in a generated order number.
pub const ORDER_ID_DIGITS: usize = 6;

impl OrderId {
    /// Draw a random zero-padded six-digit order number.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let n: u32 = rng.gen_range(0..1_000_000);
        Self(format!("{:0width$}", n, width = ORDER_ID_DIGITS))
    }

    /// Check the order number is exactly six ASCII digits.
    pub fn is_order_number(&self) -> bool {
        self.0.len() == ORDER_ID_DIGITS && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

/// Anything keyed by a menu item identifier.
///
/// Lets store operations accept an item, a cart line, a favorite entry or a
/// bare id interchangeably.
pub trait AsItemId {
    /// The item identifier.
    fn item_id(&self) -> &ItemId;
}

impl AsItemId for ItemId {
    fn item_id(&self) -> &ItemId {
        self
    }
}

impl<T: AsItemId + ?Sized> AsItemId for &T {
    fn item_id(&self) -> &ItemId {
        (**self).item_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_id_creation() {
        let id = ItemId::new("cheese-dosa");
        assert_eq!(id.as_str(), "cheese-dosa");
    }

    #[test]
    fn test_id_from_string() {
        let id: CategoryId = "dosa".into();
        assert_eq!(id.as_str(), "dosa");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ItemId::new("tea");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"tea\"");
    }

    #[test]
    fn test_order_number_is_six_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let id = OrderId::random(&mut rng);
            assert!(id.is_order_number(), "bad order number {}", id);
        }
    }

    #[test]
    fn test_order_number_validation() {
        assert!(OrderId::new("000042").is_order_number());
        assert!(!OrderId::new("42").is_order_number());
        assert!(!OrderId::new("12a456").is_order_number());
    }
}
