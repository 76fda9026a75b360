//! The cart store.

use crate::cart::CartLine;
use crate::catalog::MenuItem;
use crate::ids::{AsItemId, ItemId};
use crate::money::Money;
use crate::observe::{Observers, SubscriptionId};

/// The session's cart.
///
/// Holds at most one line per item ID, each with quantity of at least 1.
/// Subscribers receive the lines after every change.
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    observers: Observers<[CartLine]>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of an item.
    ///
    /// Bumps the existing line in place, or appends a new line with
    /// quantity 1.
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.lines.iter().position(|l| l.item_id() == &item.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.bump_quantity();
                tracing::debug!(item_id = %item.id, quantity = line.quantity(), "Cart quantity increased");
            }
            None => {
                self.lines.push(CartLine::new(item.clone()));
                tracing::debug!(item_id = %item.id, "Item added to cart");
            }
        }
        self.notify();
    }

    /// Remove one unit of an item.
    ///
    /// Accepts anything keyed by an item ID. A line at quantity 1 is removed
    /// entirely. An absent item is a no-op and notifies nobody.
    pub fn remove_item(&mut self, item: impl AsItemId) {
        let id = item.item_id();
        let Some(index) = self.lines.iter().position(|l| l.item_id() == id) else {
            return;
        };
        if self.lines[index].drop_quantity() {
            tracing::debug!(item_id = %id, quantity = self.lines[index].quantity(), "Cart quantity decreased");
        } else {
            self.lines.remove(index);
            tracing::debug!(item_id = %id, "Item removed from cart");
        }
        self.notify();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        tracing::debug!("Cart cleared");
        self.notify();
    }

    /// Quantity of an item, or 0 if absent.
    pub fn quantity_of(&self, item: impl AsItemId) -> u32 {
        self.line(item).map_or(0, CartLine::quantity)
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self) -> Money {
        Money::sum(self.lines.iter().map(CartLine::subtotal))
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Line for an item, if present.
    pub fn line(&self, item: impl AsItemId) -> Option<&CartLine> {
        let id = item.item_id();
        self.lines.iter().find(|l| l.item_id() == id)
    }

    /// Check if the cart has an item.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.line(id).is_some()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity()))
    }

    /// Register a listener called with the lines after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&[CartLine]) + Send + Sync + 'static,
    {
        self.observers.subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn notify(&self) {
        self.observers.publish(&self.lines);
    }
}
