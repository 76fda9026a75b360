//! Menu screen state over the current catalog.

use canteen_executor::Overlay;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogLoader, CatalogProvider, MenuItem, RemoteCatalog};
use crate::ids::CategoryId;
use crate::money::Money;
use crate::search::{keyword_search, CategorySelection, Filter, MenuQuery};

/// Default price ceiling for the quick bites row.
pub const DEFAULT_QUICK_BITE_MAX_PRICE: Money = Money::from_rupees(50);

/// Default length of the quick bites row.
pub const DEFAULT_QUICK_BITE_LIMIT: usize = 4;

/// A category chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    /// What selecting the chip does.
    pub selection: CategorySelection,
    /// Chip label.
    pub name: String,
}

/// Menu browsing state: the catalog plus the user's search text and
/// category chip.
///
/// Refreshing the catalog keeps the current query.
#[derive(Debug, Clone)]
pub struct MenuBrowser {
    loader: CatalogLoader,
    query: MenuQuery,
    quick_bite_max_price: Money,
    quick_bite_limit: usize,
}

impl MenuBrowser {
    /// Create a browser over a loader with no filters.
    pub fn new(loader: CatalogLoader) -> Self {
        Self {
            loader,
            query: MenuQuery::new(),
            quick_bite_max_price: DEFAULT_QUICK_BITE_MAX_PRICE,
            quick_bite_limit: DEFAULT_QUICK_BITE_LIMIT,
        }
    }

    /// Create a browser over the bundled menu.
    pub fn bundled() -> Self {
        Self::new(CatalogLoader::bundled())
    }

    /// Set the quick bites row parameters.
    pub fn with_quick_bites(mut self, max_price: Money, limit: usize) -> Self {
        self.quick_bite_max_price = max_price;
        self.quick_bite_limit = limit;
        self
    }

    /// Preselect a category, e.g. from a deep link.
    ///
    /// Ignored unless the category exists in the current catalog.
    pub fn with_initial_category(mut self, id: &str) -> Self {
        let id = CategoryId::new(id);
        if self.catalog().category(&id).is_some() {
            self.query.category = CategorySelection::Only(id);
        } else {
            tracing::debug!(category = %id, "Initial category not in catalog, ignoring");
        }
        self
    }

    /// Current catalog.
    pub fn catalog(&self) -> &Catalog {
        self.loader.catalog()
    }

    /// The underlying loader.
    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    /// Current query.
    pub fn query(&self) -> &MenuQuery {
        &self.query
    }

    /// Fetch the remote catalog. The query is left as it is.
    pub async fn refresh<R>(&mut self, remote: &R) -> Overlay
    where
        R: RemoteCatalog + ?Sized,
    {
        self.loader.refresh(remote).await
    }

    /// Fetch remote items only. The query is left as it is.
    pub async fn refresh_items<R>(&mut self, remote: &R) -> Overlay
    where
        R: RemoteCatalog + ?Sized,
    {
        self.loader.refresh_items(remote).await
    }

    /// Set the search text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    /// Select a category chip.
    pub fn select_category(&mut self, selection: CategorySelection) {
        self.query.category = selection;
    }

    /// Items matching the current query, in menu order.
    pub fn visible_items(&self) -> Vec<&MenuItem> {
        self.query.apply(&self.catalog().items)
    }

    /// Items flagged popular.
    pub fn popular_items(&self) -> Vec<&MenuItem> {
        self.catalog().list_popular_items()
    }

    /// The popular section shows only while the menu is unfiltered.
    pub fn shows_popular_section(&self) -> bool {
        self.query.is_unfiltered()
    }

    /// Category chips: "All" first, then catalog categories in order.
    pub fn category_options(&self) -> Vec<CategoryOption> {
        std::iter::once(CategoryOption {
            selection: CategorySelection::All,
            name: "All".to_string(),
        })
        .chain(self.catalog().categories.iter().map(|c| CategoryOption {
            selection: CategorySelection::Only(c.id.clone()),
            name: c.name.clone(),
        }))
        .collect()
    }

    /// Cheap items for the home screen row.
    pub fn quick_bites(&self) -> Vec<&MenuItem> {
        let filter = Filter::MaxPrice(self.quick_bite_max_price);
        self.catalog()
            .items
            .iter()
            .filter(|item| filter.matches(item))
            .take(self.quick_bite_limit)
            .collect()
    }

    /// Search-screen lookup. A blank query returns nothing.
    pub fn search(&self, text: &str) -> Vec<&MenuItem> {
        keyword_search(&self.catalog().items, text)
    }
}

impl Default for MenuBrowser {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, InMemoryCatalogStore, CatalogWriter};
    use canteen_executor::Origin;

    fn ids(items: Vec<&MenuItem>) -> Vec<&str> {
        items.into_iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_quick_bites() {
        let browser = MenuBrowser::bundled();
        assert_eq!(
            ids(browser.quick_bites()),
            vec!["poha", "sabudana-khichdi", "pineapple-juice", "mosambi-juice"]
        );

        let browser = MenuBrowser::bundled().with_quick_bites(Money::from_rupees(25), 10);
        assert_eq!(ids(browser.quick_bites()), vec!["tea", "coffee"]);
    }

    #[test]
    fn test_popular_section_visibility() {
        let mut browser = MenuBrowser::bundled();
        assert!(browser.shows_popular_section());
        assert_eq!(browser.popular_items().len(), 8);

        browser.set_search_text("dosa");
        assert!(!browser.shows_popular_section());
        browser.set_search_text("");
        browser.select_category(CategorySelection::from_id("juices"));
        assert!(!browser.shows_popular_section());
        assert_eq!(browser.visible_items().len(), 3);
    }

    #[test]
    fn test_initial_category_must_exist() {
        let browser = MenuBrowser::bundled().with_initial_category("beverages");
        assert_eq!(browser.query().category.as_str(), "beverages");

        let browser = MenuBrowser::bundled().with_initial_category("desserts");
        assert!(browser.query().category.is_all());
    }

    #[test]
    fn test_category_options() {
        let options = MenuBrowser::bundled().category_options();
        assert_eq!(options.len(), 7);
        assert_eq!(options[0].name, "All");
        assert!(options[0].selection.is_all());
        assert_eq!(options[1].name, "DOSA VARIETY");
    }

    #[tokio::test]
    async fn test_refresh_preserves_query() {
        let store = InMemoryCatalogStore::new();
        store
            .put_category(&Category::new("snacks", "SNACKS"))
            .await
            .unwrap();
        store
            .put_item(&MenuItem::new("vada-pav", "Vada Pav", Money::from_rupees(20), "snacks"))
            .await
            .unwrap();

        let mut browser = MenuBrowser::bundled();
        browser.set_search_text("pav");
        browser.select_category(CategorySelection::from_id("snacks"));
        assert!(browser.visible_items().is_empty());

        assert!(browser.refresh(&store).await.is_applied());
        assert_eq!(browser.loader().origin(), Origin::Fetched);
        assert_eq!(browser.query().text, "pav");
        assert_eq!(ids(browser.visible_items()), vec!["vada-pav"]);
        assert_eq!(browser.category_options().len(), 2);
    }
}
