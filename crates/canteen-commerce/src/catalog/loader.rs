//! Bundled-then-remote catalog loading.

use canteen_executor::{Fallback, Origin, Overlay};

use crate::catalog::{Catalog, RemoteCatalog};

/// Holds the current catalog: bundled data until a remote fetch replaces it.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    data: Fallback<Catalog>,
}

impl CatalogLoader {
    /// Start from a catalog that is shown until a fetch succeeds.
    pub fn new(initial: Catalog) -> Self {
        Self {
            data: Fallback::new(initial),
        }
    }

    /// Start from the bundled menu.
    pub fn bundled() -> Self {
        Self::new(Catalog::bundled())
    }

    /// Current catalog.
    pub fn catalog(&self) -> &Catalog {
        self.data.get()
    }

    /// Whether the current catalog came from the remote store.
    pub fn origin(&self) -> Origin {
        self.data.origin()
    }

    /// Fetch categories and items together.
    ///
    /// The catalog is replaced only if both requests succeed and both lists
    /// are non-empty.
    pub async fn refresh<R>(&mut self, remote: &R) -> Overlay
    where
        R: RemoteCatalog + ?Sized,
    {
        let fetched = futures::try_join!(remote.fetch_categories(), remote.fetch_items())
            .map(|(categories, items)| Catalog::new(categories, items));
        let outcome = self.data.overlay(fetched, Catalog::is_complete);
        if outcome.is_applied() {
            tracing::info!(
                categories = self.catalog().categories.len(),
                items = self.catalog().items.len(),
                "Catalog loaded from remote"
            );
        }
        outcome
    }

    /// Fetch items only, keeping the current categories.
    pub async fn refresh_items<R>(&mut self, remote: &R) -> Overlay
    where
        R: RemoteCatalog + ?Sized,
    {
        let fetched = remote.fetch_items().await;
        self.data.overlay_with(
            fetched,
            |items| !items.is_empty(),
            |catalog, items| catalog.items = items,
        )
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, MenuItem};
    use crate::error::CommerceError;
    use crate::money::Money;
    use async_trait::async_trait;

    struct StubRemote {
        categories: Result<Vec<Category>, String>,
        items: Result<Vec<MenuItem>, String>,
    }

    #[async_trait]
    impl RemoteCatalog for StubRemote {
        async fn fetch_categories(&self) -> Result<Vec<Category>, CommerceError> {
            self.categories.clone().map_err(CommerceError::Catalog)
        }

        async fn fetch_items(&self) -> Result<Vec<MenuItem>, CommerceError> {
            self.items.clone().map_err(CommerceError::Catalog)
        }
    }

    fn remote_menu() -> (Vec<Category>, Vec<MenuItem>) {
        (
            vec![Category::new("snacks", "SNACKS")],
            vec![MenuItem::new("samosa", "Samosa", Money::from_rupees(15), "snacks")],
        )
    }

    #[tokio::test]
    async fn test_successful_refresh_replaces_catalog() {
        let (categories, items) = remote_menu();
        let remote = StubRemote {
            categories: Ok(categories),
            items: Ok(items),
        };
        let mut loader = CatalogLoader::bundled();
        assert_eq!(loader.origin(), Origin::Default);

        assert_eq!(loader.refresh(&remote).await, Overlay::Applied);
        assert_eq!(loader.origin(), Origin::Fetched);
        assert_eq!(loader.catalog().items.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_result_keeps_bundled() {
        let (categories, _) = remote_menu();
        let remote = StubRemote {
            categories: Ok(categories),
            items: Ok(Vec::new()),
        };
        let mut loader = CatalogLoader::bundled();
        assert_eq!(loader.refresh(&remote).await, Overlay::Rejected);
        assert_eq!(loader.catalog(), &Catalog::bundled());
    }

    #[tokio::test]
    async fn test_failure_keeps_bundled() {
        let (_, items) = remote_menu();
        let remote = StubRemote {
            categories: Err("offline".into()),
            items: Ok(items),
        };
        let mut loader = CatalogLoader::bundled();
        assert!(matches!(loader.refresh(&remote).await, Overlay::Failed(_)));
        assert_eq!(loader.catalog(), &Catalog::bundled());
    }

    #[tokio::test]
    async fn test_refresh_items_keeps_categories() {
        let (_, items) = remote_menu();
        let remote = StubRemote {
            categories: Err("unused".into()),
            items: Ok(items),
        };
        let mut loader = CatalogLoader::bundled();
        assert!(loader.refresh_items(&remote).await.is_applied());
        assert_eq!(loader.catalog().categories.len(), 6);
        assert_eq!(loader.catalog().items[0].id.as_str(), "samosa");
    }
}
