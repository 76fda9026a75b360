//! Read access to the menu.

use serde::{Deserialize, Serialize};

use crate::catalog::{seed, Category, MenuItem};
use crate::ids::{CategoryId, ItemId};

/// Source of menu data, normalized to [`MenuItem`] and [`Category`].
pub trait CatalogProvider {
    /// All categories, in menu order.
    fn list_categories(&self) -> &[Category];

    /// All items, in menu order.
    fn list_items(&self) -> &[MenuItem];

    /// Items flagged popular.
    fn list_popular_items(&self) -> Vec<&MenuItem> {
        self.list_items().iter().filter(|i| i.popular).collect()
    }

    /// Items belonging to a category.
    fn items_in_category(&self, category: &CategoryId) -> Vec<&MenuItem> {
        self.list_items()
            .iter()
            .filter(|i| &i.category_id == category)
            .collect()
    }

    /// Look up an item by ID.
    fn item(&self, id: &ItemId) -> Option<&MenuItem> {
        self.list_items().iter().find(|i| &i.id == id)
    }

    /// Look up a category by ID.
    fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.list_categories().iter().find(|c| &c.id == id)
    }
}

/// An in-memory menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Categories, in menu order.
    pub categories: Vec<Category>,
    /// Items, in menu order.
    pub items: Vec<MenuItem>,
}

impl Catalog {
    /// Create a catalog from its parts.
    pub fn new(categories: Vec<Category>, items: Vec<MenuItem>) -> Self {
        Self { categories, items }
    }

    /// The menu shipped with the application.
    pub fn bundled() -> Self {
        Self::new(seed::bundled_categories(), seed::bundled_items())
    }

    /// Check if both lists have content.
    pub fn is_complete(&self) -> bool {
        !self.categories.is_empty() && !self.items.is_empty()
    }
}

impl CatalogProvider for Catalog {
    fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    fn list_items(&self) -> &[MenuItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popular_items() {
        let catalog = Catalog::bundled();
        let popular: Vec<_> = catalog
            .list_popular_items()
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(
            popular,
            vec![
                "cheese-dosa",
                "poha",
                "mosambi-juice",
                "mixed-fruit-juice",
                "gobi-manchurian",
                "hakka-noodles",
                "tea",
                "hot-chocolate",
            ]
        );
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.items_in_category(&"dosa".into()).len(), 3);
        assert_eq!(
            catalog.item(&"tea".into()).map(|i| i.name.as_str()),
            Some("Tea")
        );
        assert!(catalog.item(&"pizza".into()).is_none());
        assert!(catalog.category(&"beverages".into()).is_some());
    }

    #[test]
    fn test_is_complete() {
        assert!(Catalog::bundled().is_complete());
        assert!(!Catalog::new(Vec::new(), seed::bundled_items()).is_complete());
    }
}
