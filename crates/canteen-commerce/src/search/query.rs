//! Menu query state.

use crate::catalog::MenuItem;
use crate::ids::CategoryId;
use crate::search::Filter;
use serde::{Deserialize, Serialize};

/// ID of the synthetic "All" category option.
pub const ALL_CATEGORIES_ID: &str = "all";

/// Category chip selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategorySelection {
    /// No category restriction.
    #[default]
    All,
    /// One category.
    Only(CategoryId),
}

impl CategorySelection {
    /// Parse a chip ID, where `"all"` selects everything.
    pub fn from_id(id: &str) -> Self {
        if id == ALL_CATEGORIES_ID {
            CategorySelection::All
        } else {
            CategorySelection::Only(CategoryId::new(id))
        }
    }

    /// The chip ID.
    pub fn as_str(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES_ID,
            CategorySelection::Only(id) => id.as_str(),
        }
    }

    /// Check if this is the "All" chip.
    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }
}

/// Search text and category chip on the menu screen.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MenuQuery {
    /// Text matched against item names.
    pub text: String,
    /// Selected category.
    pub category: CategorySelection,
}

impl MenuQuery {
    /// Create an unfiltered query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: CategorySelection) -> Self {
        self.category = category;
        self
    }

    /// Filters this query applies.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if !self.text.is_empty() {
            filters.push(Filter::NameContains(self.text.clone()));
        }
        if let CategorySelection::Only(id) = &self.category {
            filters.push(Filter::Category(id.clone()));
        }
        filters
    }

    /// Items passing every filter, in menu order.
    pub fn apply<'a>(&self, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        let filters = self.filters();
        items
            .iter()
            .filter(|item| filters.iter().all(|f| f.matches(item)))
            .collect()
    }

    /// Check if neither text nor category restricts the menu.
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_empty() && self.category.is_all()
    }
}

/// Search-screen lookup over name, description and ingredients.
///
/// A blank query returns nothing.
pub fn keyword_search<'a>(items: &'a [MenuItem], query: &str) -> Vec<&'a MenuItem> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let filter = Filter::keyword(query);
    items.iter().filter(|item| filter.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(items: Vec<&MenuItem>) -> Vec<&str> {
        items.into_iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_matches_all() {
        let catalog = Catalog::bundled();
        let query = MenuQuery::new();
        assert!(query.is_unfiltered());
        assert_eq!(query.apply(&catalog.items).len(), catalog.items.len());
    }

    #[test]
    fn test_text_and_category_combine() {
        let catalog = Catalog::bundled();
        let query = MenuQuery::new()
            .with_text("DOSA")
            .with_category(CategorySelection::from_id("dosa"));
        assert_eq!(
            ids(query.apply(&catalog.items)),
            vec!["cheese-dosa", "paneer-dosa", "rava-dosa"]
        );

        let query = query.with_category(CategorySelection::from_id("breakfast"));
        assert!(query.apply(&catalog.items).is_empty());
        assert!(!query.is_unfiltered());
    }

    #[test]
    fn test_keyword_search() {
        let catalog = Catalog::bundled();
        assert!(keyword_search(&catalog.items, "   ").is_empty());
        assert_eq!(
            ids(keyword_search(&catalog.items, "cocoa")),
            vec!["hot-chocolate"]
        );
        assert_eq!(
            ids(keyword_search(&catalog.items, "chai")),
            vec!["tea"]
        );
    }

    #[test]
    fn test_category_selection_ids() {
        assert!(CategorySelection::from_id("all").is_all());
        assert_eq!(CategorySelection::from_id("juices").as_str(), "juices");
    }
}
