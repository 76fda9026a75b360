//! Cart line type.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::catalog::MenuItem;
use crate::ids::{AsItemId, ItemId};
use crate::money::Money;

/// One distinct item in the cart.
///
/// The item is a snapshot taken when the line was created; later quantity
/// changes never replace it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    item: MenuItem,
    quantity: NonZeroU32,
}

impl CartLine {
    /// Create a line with quantity 1.
    pub fn new(item: MenuItem) -> Self {
        Self {
            item,
            quantity: NonZeroU32::MIN,
        }
    }

    /// The item snapshot.
    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    /// Quantity, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Add one.
    pub fn bump_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Remove one. Returns false, leaving the quantity unchanged, when the
    /// line holds a single unit.
    pub fn drop_quantity(&mut self) -> bool {
        match NonZeroU32::new(self.quantity.get() - 1) {
            Some(q) => {
                self.quantity = q;
                true
            }
            None => false,
        }
    }

    /// Price × quantity.
    pub fn subtotal(&self) -> Money {
        self.item.price.saturating_mul(self.quantity.get())
    }
}

impl AsItemId for CartLine {
    fn item_id(&self) -> &ItemId {
        &self.item.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> MenuItem {
        MenuItem::new("tea", "Tea", Money::from_rupees(20), "beverages")
    }

    #[test]
    fn test_quantity_steps() {
        let mut line = CartLine::new(tea());
        assert_eq!(line.quantity(), 1);
        line.bump_quantity();
        line.bump_quantity();
        assert_eq!(line.quantity(), 3);
        assert_eq!(line.subtotal(), Money::from_rupees(60));

        assert!(line.drop_quantity());
        assert!(line.drop_quantity());
        assert!(!line.drop_quantity());
        assert_eq!(line.quantity(), 1);
    }
}
