//! Menu filter types.

use crate::catalog::MenuItem;
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A predicate over menu items. Text matching is case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Items in one category.
    Category(CategoryId),
    /// Name contains the text.
    NameContains(String),
    /// Name, description or any ingredient contains the text.
    Keyword(String),
    /// Items flagged popular.
    Popular,
    /// Price at or below a limit.
    MaxPrice(Money),
}

impl Filter {
    /// Create a category filter.
    pub fn category(id: impl Into<CategoryId>) -> Self {
        Filter::Category(id.into())
    }

    /// Create a name filter.
    pub fn name_contains(text: impl Into<String>) -> Self {
        Filter::NameContains(text.into())
    }

    /// Create a keyword filter.
    pub fn keyword(text: impl Into<String>) -> Self {
        Filter::Keyword(text.into())
    }

    /// Check whether an item passes.
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            Filter::Category(id) => &item.category_id == id,
            Filter::NameContains(text) => contains_ignore_case(&item.name, text),
            Filter::Keyword(text) => {
                contains_ignore_case(&item.name, text)
                    || contains_ignore_case(&item.description, text)
                    || item
                        .ingredients
                        .iter()
                        .any(|i| contains_ignore_case(i, text))
            }
            Filter::Popular => item.popular,
            Filter::MaxPrice(limit) => item.price <= *limit,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
