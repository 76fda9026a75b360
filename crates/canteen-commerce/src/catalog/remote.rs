//! Remote document store boundary for the menu.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::catalog::{Catalog, Category, ItemDraft, MenuItem};
use crate::error::CommerceError;
use crate::ids::ItemId;

/// Collection holding category documents.
pub const CATEGORIES_COLLECTION: &str = "menuCategories";

/// Collection holding item documents.
pub const ITEMS_COLLECTION: &str = "menuItems";

/// Read side of the remote menu store.
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    /// Fetch all categories.
    async fn fetch_categories(&self) -> Result<Vec<Category>, CommerceError>;

    /// Fetch all items.
    async fn fetch_items(&self) -> Result<Vec<MenuItem>, CommerceError>;
}

/// Write side of the remote menu store, used by the admin panel.
#[async_trait]
pub trait CatalogWriter: Send + Sync {
    /// Create or overwrite an item, keyed by its ID.
    async fn put_item(&self, item: &MenuItem) -> Result<(), CommerceError>;

    /// Delete an item. Deleting a missing item is not an error.
    async fn delete_item(&self, id: &ItemId) -> Result<(), CommerceError>;

    /// Create or overwrite a category, keyed by its ID.
    async fn put_category(&self, category: &Category) -> Result<(), CommerceError>;
}

/// Decode an item document.
///
/// Updated documents may lack an `id` field; the document key stands in
/// for it.
pub fn decode_item_document(doc_id: &str, mut doc: Value) -> Result<MenuItem, CommerceError> {
    if let Value::Object(fields) = &mut doc {
        fields
            .entry("id")
            .or_insert_with(|| Value::String(doc_id.to_string()));
    }
    Ok(serde_json::from_value(doc)?)
}

/// Decode a category document, with the same `id` fallback as items.
pub fn decode_category_document(doc_id: &str, mut doc: Value) -> Result<Category, CommerceError> {
    if let Value::Object(fields) = &mut doc {
        fields
            .entry("id")
            .or_insert_with(|| Value::String(doc_id.to_string()));
    }
    Ok(serde_json::from_value(doc)?)
}

/// Validate a draft and write it. Nothing is written if validation fails.
pub async fn publish_draft<W>(writer: &W, draft: &ItemDraft) -> Result<MenuItem, CommerceError>
where
    W: CatalogWriter + ?Sized,
{
    let item = draft.validate()?;
    writer.put_item(&item).await?;
    tracing::info!(item_id = %item.id, "Menu item saved");
    Ok(item)
}

/// Upload a whole catalog, categories first.
pub async fn seed_remote<W>(writer: &W, catalog: &Catalog) -> Result<(), CommerceError>
where
    W: CatalogWriter + ?Sized,
{
    for category in &catalog.categories {
        writer.put_category(category).await?;
    }
    for item in &catalog.items {
        writer.put_item(item).await?;
    }
    tracing::info!(
        categories = catalog.categories.len(),
        items = catalog.items.len(),
        "Remote catalog seeded"
    );
    Ok(())
}

/// In-memory document store (for development/testing).
///
/// Holds raw JSON documents per collection, so reads go through the same
/// decoding as a real store would.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    collections: Mutex<BTreeMap<&'static str, BTreeMap<String, Value>>>,
}

impl InMemoryCatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw document, replacing any existing one.
    pub fn insert_document(&self, collection: &'static str, doc_id: impl Into<String>, doc: Value) {
        self.lock()
            .entry(collection)
            .or_default()
            .insert(doc_id.into(), doc);
    }

    /// Number of documents in a collection.
    pub fn document_count(&self, collection: &str) -> usize {
        self.lock().get(collection).map_or(0, BTreeMap::len)
    }

    fn documents(&self, collection: &str) -> Vec<(String, Value)> {
        self.lock()
            .get(collection)
            .map(|docs| docs.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<&'static str, BTreeMap<String, Value>>> {
        self.collections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RemoteCatalog for InMemoryCatalogStore {
    async fn fetch_categories(&self) -> Result<Vec<Category>, CommerceError> {
        self.documents(CATEGORIES_COLLECTION)
            .into_iter()
            .map(|(id, doc)| decode_category_document(&id, doc))
            .collect()
    }

    async fn fetch_items(&self) -> Result<Vec<MenuItem>, CommerceError> {
        self.documents(ITEMS_COLLECTION)
            .into_iter()
            .map(|(id, doc)| decode_item_document(&id, doc))
            .collect()
    }
}

#[async_trait]
impl CatalogWriter for InMemoryCatalogStore {
    async fn put_item(&self, item: &MenuItem) -> Result<(), CommerceError> {
        let doc = serde_json::to_value(item)?;
        self.insert_document(ITEMS_COLLECTION, item.id.as_str(), doc);
        Ok(())
    }

    async fn delete_item(&self, id: &ItemId) -> Result<(), CommerceError> {
        if let Some(docs) = self.lock().get_mut(ITEMS_COLLECTION) {
            docs.remove(id.as_str());
        }
        Ok(())
    }

    async fn put_category(&self, category: &Category) -> Result<(), CommerceError> {
        let doc = serde_json::to_value(category)?;
        self.insert_document(CATEGORIES_COLLECTION, category.id.as_str(), doc);
        Ok(())
    }
}
