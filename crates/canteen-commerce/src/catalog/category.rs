//! Menu categories.

use crate::catalog::ImageRef;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A menu section such as "DOSA VARIETY".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Category image.
    #[serde(default)]
    pub image: Option<ImageRef>,
    /// Shown on the home screen.
    #[serde(default)]
    pub featured: bool,
}

impl Category {
    /// Create a category with an empty description and no image.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            image: None,
            featured: false,
        }
    }
}
