//! Per-login application context.

use canteen_executor::Scheduler;
use rand::Rng;

use crate::auth::{AuthError, AuthProvider, AuthSession, Credentials};
use crate::cart::CartStore;
use crate::catalog::{CatalogProvider, MenuItem};
use crate::checkout::{place_order, OrderTracker};
use crate::config::CanteenConfig;
use crate::error::CommerceError;
use crate::favorites::FavoritesStore;
use crate::ids::ItemId;
use crate::search::MenuBrowser;

/// Owns the stores for one running app.
///
/// Cart and favorites live only as long as the signed-in session; signing
/// out empties both.
#[derive(Debug)]
pub struct AppSession {
    config: CanteenConfig,
    user: Option<AuthSession>,
    cart: CartStore,
    favorites: FavoritesStore,
    menu: MenuBrowser,
}

impl AppSession {
    /// Create a session from config, with the bundled menu.
    pub fn new(config: CanteenConfig) -> Self {
        let menu = MenuBrowser::bundled().with_quick_bites(
            config.menu.quick_bite_max_price,
            config.menu.quick_bite_limit,
        );
        Self {
            config,
            user: None,
            cart: CartStore::new(),
            favorites: FavoritesStore::new(),
            menu,
        }
    }

    /// Install logging from config, then create the session.
    pub fn bootstrap(config: CanteenConfig) -> anyhow::Result<Self> {
        canteen_observability::init_logging(&config.logging)?;
        tracing::info!(level = %config.logging.level, "Canteen session starting");
        Ok(Self::new(config))
    }

    /// Configuration in use.
    pub fn config(&self) -> &CanteenConfig {
        &self.config
    }

    /// Signed-in user, if any.
    pub fn user(&self) -> Option<&AuthSession> {
        self.user.as_ref()
    }

    /// Check if a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Sign in. Blank credentials are rejected without calling the provider.
    pub async fn sign_in<A>(
        &mut self,
        provider: &A,
        credentials: &Credentials,
    ) -> Result<&AuthSession, AuthError>
    where
        A: AuthProvider + ?Sized,
    {
        credentials.validate()?;
        let session = provider.sign_in(credentials).await.map_err(|e| {
            tracing::warn!(email = %credentials.email, error = %e, "Sign-in failed");
            e
        })?;
        tracing::info!(user_id = %session.user_id, "Signed in");
        Ok(self.user.insert(session))
    }

    /// Sign out and drop the cart and favorites.
    ///
    /// Local state is cleared even if the provider call fails.
    pub async fn sign_out<A>(&mut self, provider: &A) -> Result<(), AuthError>
    where
        A: AuthProvider + ?Sized,
    {
        let Some(session) = self.user.take() else {
            return Ok(());
        };
        self.cart.clear();
        self.favorites.clear();
        provider.sign_out(&session).await?;
        tracing::info!(user_id = %session.user_id, "Signed out");
        Ok(())
    }

    /// The cart.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart, for mutation.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Favorites.
    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// Favorites, for mutation.
    pub fn favorites_mut(&mut self) -> &mut FavoritesStore {
        &mut self.favorites
    }

    /// Menu browsing state.
    pub fn menu(&self) -> &MenuBrowser {
        &self.menu
    }

    /// Menu browsing state, for mutation.
    pub fn menu_mut(&mut self) -> &mut MenuBrowser {
        &mut self.menu
    }

    /// Add a catalog item to the cart by ID.
    pub fn add_to_cart(&mut self, id: &ItemId) -> Result<(), CommerceError> {
        let item = self
            .menu
            .catalog()
            .item(id)
            .cloned()
            .ok_or_else(|| CommerceError::ItemNotFound(id.to_string()))?;
        self.cart.add_item(&item);
        Ok(())
    }

    /// Add a favorite to the cart, using its stored snapshot. Returns false
    /// if the item is not a favorite.
    pub fn add_favorite_to_cart(&mut self, id: &ItemId) -> bool {
        let Some(item) = self.favorites.get(id).map(|e| e.item().clone()) else {
            return false;
        };
        self.cart.add_item(&item);
        true
    }

    /// Toggle an item's favorite flag. Returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, item: &MenuItem) -> bool {
        self.favorites.toggle(item)
    }

    /// Place an order for the cart and start tracking it.
    pub fn checkout<S, R>(&self, scheduler: S, rng: &mut R) -> Result<OrderTracker<S>, CommerceError>
    where
        S: Scheduler,
        R: Rng + ?Sized,
    {
        let state = place_order(&self.cart, rng)?;
        Ok(OrderTracker::start(state, scheduler, self.config.schedule()))
    }
}

impl Default for AppSession {
    fn default() -> Self {
        Self::new(CanteenConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::UserId;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeAuth {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AuthProvider for FakeAuth {
        async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if credentials.password == "letmein" {
                Ok(AuthSession {
                    user_id: UserId::new("u-1"),
                    email: credentials.email.clone(),
                })
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }

        async fn sign_out(&self, _session: &AuthSession) -> Result<(), AuthError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_blank_credentials_skip_provider() {
        let auth = FakeAuth::default();
        let mut session = AppSession::default();
        let result = session.sign_in(&auth, &Credentials::new("", "")).await;
        assert_eq!(result.err(), Some(AuthError::MissingCredentials));
        assert_eq!(auth.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let auth = FakeAuth::default();
        let mut session = AppSession::default();
        let result = session
            .sign_in(&auth, &Credentials::new("s@college.edu", "nope"))
            .await;
        assert_eq!(result.err(), Some(AuthError::InvalidCredentials));
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_out_clears_stores() {
        let auth = FakeAuth::default();
        let mut session = AppSession::default();
        session
            .sign_in(&auth, &Credentials::new("s@college.edu", "letmein"))
            .await
            .unwrap();

        session.add_to_cart(&ItemId::new("tea")).unwrap();
        let poha = session.menu().catalog().item(&ItemId::new("poha")).cloned().unwrap();
        assert!(session.toggle_favorite(&poha));

        session.sign_out(&auth).await.unwrap();
        assert!(!session.is_signed_in());
        assert!(session.cart().is_empty());
        assert!(session.favorites().is_empty());
    }

    #[test]
    fn test_favorites_and_cart_are_independent() {
        let mut session = AppSession::default();
        let poha = session.menu().catalog().item(&ItemId::new("poha")).cloned().unwrap();
        session.toggle_favorite(&poha);
        assert!(session.cart().is_empty());

        assert!(session.add_favorite_to_cart(&poha.id));
        assert!(!session.add_favorite_to_cart(&ItemId::new("tea")));
        assert_eq!(session.cart().quantity_of(&poha), 1);
        assert!(session.favorites().is_favorite(&poha));
    }

    #[test]
    fn test_add_unknown_item() {
        let mut session = AppSession::default();
        assert!(matches!(
            session.add_to_cart(&ItemId::new("pizza")),
            Err(CommerceError::ItemNotFound(_))
        ));
    }
}
