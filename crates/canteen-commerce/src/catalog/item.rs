//! Menu item types.

use crate::ids::{AsItemId, CategoryId, ItemId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Bundled image used when an item has none or names an unknown asset.
pub const DEFAULT_IMAGE_ASSET: &str = "cheese-dosa.jpg";

/// Rating shown for items that have not been rated.
pub const DEFAULT_RATING: f32 = 4.5;

/// Images shipped with the application.
pub const BUNDLED_IMAGE_ASSETS: &[&str] = &[
    "cheese-dosa.jpg",
    "paneer-dosa.jpg",
    "rava-dosa.jpg",
    "paratha.jpg",
    "poha.jpg",
    "sabudana-khichdi.jpg",
    "gobi-manchurian.jpg",
    "hakka-noodles.jpg",
    "schezwan-rice.jpg",
    "tea.jpg",
    "coffee.jpg",
    "hot-chocolate.jpg",
    "strawberry-milkshake.jpg",
    "mosambi-juice.jpg",
    "mixed-fruit-juice.jpg",
    "pineapple-juice.jpg",
];

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageRef {
    /// A bundled asset, by file name.
    Asset(String),
    /// A remote URL.
    Remote(String),
}

impl ImageRef {
    /// Classify a raw image string.
    ///
    /// `http(s)://` strings are remote; anything else names a bundled
    /// asset, falling back to [`DEFAULT_IMAGE_ASSET`] if unknown.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            return ImageRef::Remote(raw.to_string());
        }
        ImageRef::asset(raw)
    }

    /// A bundled asset, or the default image if the name is not bundled.
    pub fn asset(name: &str) -> Self {
        if BUNDLED_IMAGE_ASSETS.contains(&name) {
            ImageRef::Asset(name.to_string())
        } else {
            tracing::debug!(asset = name, "Image not bundled, using fallback");
            ImageRef::Asset(DEFAULT_IMAGE_ASSET.to_string())
        }
    }

    /// The raw string form.
    pub fn as_str(&self) -> &str {
        match self {
            ImageRef::Asset(s) | ImageRef::Remote(s) => s,
        }
    }

    /// Check if this points at a remote URL.
    pub fn is_remote(&self) -> bool {
        matches!(self, ImageRef::Remote(_))
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        ImageRef::Asset(DEFAULT_IMAGE_ASSET.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        ImageRef::parse(&s)
    }
}

impl From<ImageRef> for String {
    fn from(image: ImageRef) -> String {
        match image {
            ImageRef::Asset(s) | ImageRef::Remote(s) => s,
        }
    }
}

/// An orderable dish.
///
/// Field names follow the remote document shape (`prepTime`, `categoryId`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time: u32,
    /// Owning category.
    pub category_id: CategoryId,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Ingredients, in display order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Shown in the popular section.
    #[serde(default)]
    pub popular: bool,
    /// Image, if any.
    #[serde(default)]
    pub image: Option<ImageRef>,
    /// Average rating, if rated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

impl MenuItem {
    /// Create an item with the required fields; the rest start empty.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: Money,
        category_id: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            prep_time: 0,
            category_id: category_id.into(),
            description: String::new(),
            ingredients: Vec::new(),
            popular: false,
            image: None,
            rating: None,
        }
    }

    /// The image to render.
    pub fn image_or_default(&self) -> ImageRef {
        self.image.clone().unwrap_or_default()
    }

    /// The rating to render.
    pub fn rating_or_default(&self) -> f32 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    /// Price with currency glyph.
    pub fn formatted_price(&self) -> String {
        self.price.display()
    }

    /// Preparation time label, e.g. "10 min".
    pub fn prep_time_label(&self) -> String {
        format!("{} min", self.prep_time)
    }
}

impl AsItemId for MenuItem {
    fn item_id(&self) -> &ItemId {
        &self.id
    }
}
