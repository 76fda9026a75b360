//! Campus canteen ordering core.
//!
//! This crate provides the domain types and logic behind the ordering app:
//!
//! - **Catalog**: Menu items, categories, the bundled menu, remote store boundary
//! - **Cart**: Cart store with per-item quantities
//! - **Favorites**: Favorites store
//! - **Search**: Menu filters, keyword search, menu browsing state
//! - **Checkout**: Order placement and the timed order tracker
//! - **Session**: Per-login context owning the stores
//!
//! # Example
//!
//! ```rust
//! use canteen_commerce::prelude::*;
//! use canteen_executor::ManualScheduler;
//! use rand::SeedableRng;
//! use std::time::Duration;
//!
//! let catalog = Catalog::bundled();
//! let mut cart = CartStore::new();
//! cart.add_item(catalog.item(&ItemId::new("cheese-dosa")).unwrap());
//! cart.add_item(catalog.item(&ItemId::new("tea")).unwrap());
//! assert_eq!(cart.total().display(), "\u{20b9}100");
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let order = place_order(&cart, &mut rng).unwrap();
//!
//! let clock = ManualScheduler::new();
//! let tracker = OrderTracker::start(order, clock.clone(), TrackerSchedule::default());
//! clock.advance(Duration::from_secs(3));
//! assert_eq!(tracker.current_stage(), OrderStage::Accepted);
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod observe;
pub mod session;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod favorites;
pub mod search;

pub use error::{CommerceError, ValidationError};
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, ValidationError};
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::observe::SubscriptionId;

    // Catalog
    pub use crate::catalog::{
        Catalog, CatalogLoader, CatalogProvider, CatalogWriter, Category, ImageRef, ItemDraft,
        MenuItem, RemoteCatalog,
    };

    // Stores
    pub use crate::cart::{CartLine, CartStore};
    pub use crate::favorites::{FavoriteEntry, FavoritesStore};

    // Search
    pub use crate::search::{CategorySelection, Filter, MenuBrowser, MenuQuery};

    // Checkout
    pub use crate::checkout::{
        place_order, OrderStage, OrderTracker, OrderTrackingState, TrackerSchedule,
    };

    // Session
    pub use crate::auth::{AuthError, AuthProvider, AuthSession, Credentials};
    pub use crate::config::CanteenConfig;
    pub use crate::session::AppSession;
}
