//! Menu catalog module.
//!
//! Contains menu items, categories, the bundled menu, and the remote store
//! boundary.

mod category;
mod draft;
mod item;
mod loader;
mod provider;
mod remote;
mod seed;

pub use category::Category;
pub use draft::ItemDraft;
pub use item::{ImageRef, MenuItem, BUNDLED_IMAGE_ASSETS, DEFAULT_IMAGE_ASSET, DEFAULT_RATING};
pub use loader::CatalogLoader;
pub use provider::{Catalog, CatalogProvider};
pub use remote::{
    decode_category_document, decode_item_document, publish_draft, seed_remote, CatalogWriter,
    InMemoryCatalogStore, RemoteCatalog, CATEGORIES_COLLECTION, ITEMS_COLLECTION,
};
pub use seed::{bundled_categories, bundled_items};
