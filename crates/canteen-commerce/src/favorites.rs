//! The favorites store.

use serde::{Deserialize, Serialize};

use crate::catalog::MenuItem;
use crate::ids::{AsItemId, ItemId};
use crate::observe::{Observers, SubscriptionId};

/// A favorited item, with the display data captured when it was added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteEntry {
    item: MenuItem,
}

impl FavoriteEntry {
    /// Snapshot an item.
    pub fn new(item: MenuItem) -> Self {
        Self { item }
    }

    /// The item snapshot.
    pub fn item(&self) -> &MenuItem {
        &self.item
    }
}

impl AsItemId for FavoriteEntry {
    fn item_id(&self) -> &ItemId {
        &self.item.id
    }
}

/// The session's favorites, unique by item ID, in the order they were added.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    entries: Vec<FavoriteEntry>,
    observers: Observers<[FavoriteEntry]>,
}

impl FavoritesStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. No-op if it is already a favorite.
    pub fn add(&mut self, item: &MenuItem) {
        if self.is_favorite(&item.id) {
            return;
        }
        self.entries.push(FavoriteEntry::new(item.clone()));
        tracing::debug!(item_id = %item.id, "Added to favorites");
        self.notify();
    }

    /// Remove an item. No-op if it is not a favorite.
    pub fn remove(&mut self, item: impl AsItemId) {
        let id = item.item_id();
        let len_before = self.entries.len();
        self.entries.retain(|e| e.item_id() != id);
        if self.entries.len() < len_before {
            tracing::debug!(item_id = %id, "Removed from favorites");
            self.notify();
        }
    }

    /// Add if absent, remove if present. Returns whether the item is now a
    /// favorite.
    pub fn toggle(&mut self, item: &MenuItem) -> bool {
        if self.is_favorite(&item.id) {
            self.remove(&item.id);
            false
        } else {
            self.add(item);
            true
        }
    }

    /// Check membership.
    pub fn is_favorite(&self, item: impl AsItemId) -> bool {
        self.get(item).is_some()
    }

    /// Entry for an item, if favorited.
    pub fn get(&self, item: impl AsItemId) -> Option<&FavoriteEntry> {
        let id = item.item_id();
        self.entries.iter().find(|e| e.item_id() == id)
    }

    /// All entries, in the order added.
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all favorites.
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.entries.clear();
        self.notify();
    }

    /// Register a listener called with the entries after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&[FavoriteEntry]) + Send + Sync + 'static,
    {
        self.observers.subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn notify(&self) {
        self.observers.publish(&self.entries);
    }
}
