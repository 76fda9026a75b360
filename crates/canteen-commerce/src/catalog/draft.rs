//! Admin form input for creating and editing menu items.

use serde::{Deserialize, Serialize};

use crate::catalog::{ImageRef, MenuItem};
use crate::error::ValidationError;
use crate::ids::ItemId;
use crate::money::Money;

/// Raw menu item form, as typed by an admin.
///
/// Numeric fields are kept as text so that validation can report exactly
/// what was entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    /// Explicit ID; derived from the name when blank.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price in rupees.
    pub price: String,
    /// Preparation time in minutes; blank means zero.
    pub prep_time: String,
    /// Owning category ID.
    pub category_id: String,
    /// Description.
    pub description: String,
    /// Ingredients; blank entries are dropped.
    pub ingredients: Vec<String>,
    /// Popular flag.
    pub popular: bool,
    /// Image name or URL; blank means none.
    pub image: String,
}

impl ItemDraft {
    /// Prefill a form from an existing item for editing.
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            price: item.price.display_amount(),
            prep_time: item.prep_time.to_string(),
            category_id: item.category_id.to_string(),
            description: item.description.clone(),
            ingredients: item.ingredients.clone(),
            popular: item.popular,
            image: item
                .image
                .as_ref()
                .map(|i| i.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    /// Set ingredients from comma-separated text.
    pub fn with_ingredients_text(mut self, text: &str) -> Self {
        self.ingredients = text.split(',').map(|s| s.trim().to_string()).collect();
        self
    }

    /// The ID the item will be stored under.
    pub fn resolved_id(&self) -> ItemId {
        let explicit = self.id.trim();
        if !explicit.is_empty() {
            return ItemId::new(explicit);
        }
        ItemId::new(slugify(&self.name))
    }

    /// Validate the form into a menu item.
    pub fn validate(&self) -> Result<MenuItem, ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.price.is_empty() {
            return Err(ValidationError::MissingField("price"));
        }
        if self.category_id.is_empty() {
            return Err(ValidationError::MissingField("category"));
        }

        let rupees = parse_number("price", &self.price)?;
        if rupees < 0.0 {
            return Err(ValidationError::Negative("price"));
        }
        let price = Money::from_decimal(rupees).ok_or_else(|| ValidationError::NotANumber {
            field: "price",
            value: self.price.clone(),
        })?;

        let prep_time = if self.prep_time.trim().is_empty() {
            0
        } else {
            let minutes = parse_number("prep time", &self.prep_time)?;
            if minutes < 0.0 {
                return Err(ValidationError::Negative("prep time"));
            }
            minutes.round() as u32
        };

        let image = match self.image.trim() {
            "" => None,
            raw => Some(ImageRef::parse(raw)),
        };

        Ok(MenuItem {
            id: self.resolved_id(),
            name: self.name.clone(),
            price,
            prep_time,
            category_id: self.category_id.as_str().into(),
            description: self.description.clone(),
            ingredients: self
                .ingredients
                .iter()
                .filter(|i| !i.trim().is_empty())
                .cloned()
                .collect(),
            popular: self.popular,
            image,
            rating: None,
        })
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        })
}

/// Lowercase with whitespace runs replaced by `-`.
fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_space = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ItemDraft {
        ItemDraft {
            name: "Masala  Dosa".into(),
            price: "70".into(),
            category_id: "dosa".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_draft() {
        let item = draft()
            .with_ingredients_text("Rice batter, , Potato ")
            .validate()
            .unwrap();
        assert_eq!(item.id.as_str(), "masala-dosa");
        assert_eq!(item.price, Money::from_rupees(70));
        assert_eq!(item.prep_time, 0);
        assert_eq!(item.ingredients, vec!["Rice batter", "Potato"]);
        assert!(item.image.is_none());
    }

    #[test]
    fn test_explicit_id_is_trimmed() {
        let mut d = draft();
        d.id = "  md-01 ".into();
        assert_eq!(d.validate().unwrap().id.as_str(), "md-01");
    }

    #[test]
    fn test_required_fields() {
        let mut d = draft();
        d.name.clear();
        assert_eq!(d.validate(), Err(ValidationError::MissingField("name")));

        let mut d = draft();
        d.price.clear();
        assert_eq!(d.validate(), Err(ValidationError::MissingField("price")));

        let mut d = draft();
        d.category_id.clear();
        assert_eq!(d.validate(), Err(ValidationError::MissingField("category")));
    }

    #[test]
    fn test_numeric_fields() {
        let mut d = draft();
        d.price = "seventy".into();
        assert!(matches!(
            d.validate(),
            Err(ValidationError::NotANumber { field: "price", .. })
        ));

        let mut d = draft();
        d.prep_time = "soon".into();
        assert!(matches!(
            d.validate(),
            Err(ValidationError::NotANumber { field: "prep time", .. })
        ));

        let mut d = draft();
        d.price = "-5".into();
        assert_eq!(d.validate(), Err(ValidationError::Negative("price")));

        let mut d = draft();
        d.price = "49.5".into();
        d.prep_time = "8".into();
        let item = d.validate().unwrap();
        assert_eq!(item.price.paise(), 4950);
        assert_eq!(item.prep_time, 8);
    }

    #[test]
    fn test_edit_round_trip_keeps_id() {
        let original = draft().validate().unwrap();
        let mut d = ItemDraft::from_item(&original);
        d.name = "Butter Masala Dosa".into();
        let edited = d.validate().unwrap();
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.price, original.price);
    }
}
