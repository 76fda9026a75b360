//! Menu bundled with the application, shown before any remote data arrives.

use crate::catalog::{Category, ImageRef, MenuItem};
use crate::money::Money;

struct SeedCategory {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    image: &'static str,
    featured: bool,
}

struct SeedItem {
    id: &'static str,
    name: &'static str,
    price: i64,
    prep_time: u32,
    category: &'static str,
    description: &'static str,
    image: &'static str,
    ingredients: &'static [&'static str],
    popular: bool,
    rating: Option<f32>,
}

const CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        id: "dosa",
        name: "DOSA VARIETY",
        description: "South Indian crispy crepes made from fermented rice and lentil batter",
        image: "https://via.placeholder.com/150?text=Dosa+Variety",
        featured: true,
    },
    SeedCategory {
        id: "breakfast",
        name: "BREAKFAST",
        description: "Traditional Indian breakfast items to start your day",
        image: "https://via.placeholder.com/150?text=Breakfast",
        featured: true,
    },
    SeedCategory {
        id: "juices",
        name: "FRESH JUICES",
        description: "Freshly squeezed fruit juices",
        image: "https://via.placeholder.com/150?text=Fresh+Juices",
        featured: false,
    },
    SeedCategory {
        id: "milkshakes",
        name: "MILKSHAKES",
        description: "Thick, creamy milkshakes with various flavors",
        image: "https://via.placeholder.com/150?text=Milkshakes",
        featured: false,
    },
    SeedCategory {
        id: "veg-chinese",
        name: "VEG CHINESE",
        description: "Indo-Chinese vegetarian dishes",
        image: "https://via.placeholder.com/150?text=Veg+Chinese",
        featured: false,
    },
    SeedCategory {
        id: "beverages",
        name: "HOT BEVERAGES",
        description: "Warm drinks to refresh your soul",
        image: "https://via.placeholder.com/150?text=Hot+Beverages",
        featured: false,
    },
];

const ITEMS: &[SeedItem] = &[
    SeedItem {
        id: "cheese-dosa",
        name: "Cheese Dosa",
        price: 80,
        prep_time: 10,
        category: "dosa",
        description: "Dosa loaded with melted cheese",
        image: "cheese-dosa.jpg",
        ingredients: &["Rice batter", "Cheese", "Butter"],
        popular: true,
        rating: None,
    },
    SeedItem {
        id: "paneer-dosa",
        name: "Paneer Dosa",
        price: 85,
        prep_time: 12,
        category: "dosa",
        description: "Crispy dosa filled with spiced paneer",
        image: "paneer-dosa.jpg",
        ingredients: &["Rice batter", "Paneer", "Spices"],
        popular: false,
        rating: None,
    },
    SeedItem {
        id: "rava-dosa",
        name: "Rava Dosa",
        price: 60,
        prep_time: 10,
        category: "dosa",
        description: "Dosa made with semolina and spices",
        image: "rava-dosa.jpg",
        ingredients: &["Semolina", "Spices", "Green chilies"],
        popular: false,
        rating: None,
    },
    SeedItem {
        id: "poha",
        name: "Poha",
        price: 40,
        prep_time: 6,
        category: "breakfast",
        description: "Flattened rice cooked with spices and veggies",
        image: "poha.jpg",
        ingredients: &["Poha", "Mustard seeds", "Onion", "Peanuts"],
        popular: true,
        rating: None,
    },
    SeedItem {
        id: "sabudana-khichdi",
        name: "Sabudana Khichdi",
        price: 50,
        prep_time: 10,
        category: "breakfast",
        description: "Sago pearls cooked with peanuts and spices",
        // Not bundled; resolves to the default image.
        image: "sabudana.jpg",
        ingredients: &["Sabudana", "Peanuts", "Potato", "Curry leaves"],
        popular: false,
        rating: None,
    },
    SeedItem {
        id: "paratha",
        name: "Stuffed Paratha",
        price: 60,
        prep_time: 12,
        category: "breakfast",
        description: "Wheat flatbread stuffed with spiced potatoes",
        image: "paratha.jpg",
        ingredients: &["Wheat flour", "Potato", "Spices", "Butter"],
        popular: false,
        rating: None,
    },
    SeedItem {
        id: "pineapple-juice",
        name: "Pineapple Juice",
        price: 50,
        prep_time: 3,
        category: "juices",
        description: "Freshly extracted pineapple juice",
        image: "pineapple-juice.jpg",
        ingredients: &["Pineapple", "Sugar (optional)"],
        popular: false,
        rating: None,
    },
    SeedItem {
        id: "mosambi-juice",
        name: "Mosambi Juice",
        price: 45,
        prep_time: 3,
        category: "juices",
        description: "Sweet lime juice, fresh and tasty",
        image: "mosambi-juice.jpg",
        ingredients: &["Mosambi", "Sugar (optional)", "Salt (optional)"],
        popular: true,
        rating: Some(4.5),
    },
    SeedItem {
        id: "mixed-fruit-juice",
        name: "Mixed Fruit Juice",
        price: 60,
        prep_time: 5,
        category: "juices",
        description: "Blend of seasonal fruits",
        image: "mixed-fruit-juice.jpg",
        ingredients: &["Mango", "Banana", "Apple", "Papaya"],
        popular: true,
        rating: None,
    },
    SeedItem {
        id: "strawberry-milkshake",
        name: "Strawberry Milkshake",
        price: 75,
        prep_time: 5,
        category: "milkshakes",
        description: "Creamy milkshake made with fresh strawberries",
        image: "strawberry-milkshake.jpg",
        ingredients: &["Strawberries", "Milk", "Sugar", "Ice cream"],
        popular: false,
        rating: None,
    },
    SeedItem {
        id: "gobi-manchurian",
        name: "Gobi Manchurian",
        price: 90,
        prep_time: 15,
        category: "veg-chinese",
        description: "Crispy cauliflower tossed in tangy sauce",
        image: "gobi-manchurian.jpg",
        ingredients: &["Cauliflower", "Cornflour", "Soy sauce"],
        popular: true,
        rating: None,
    },
    SeedItem {
        id: "hakka-noodles",
        name: "Hakka Noodles",
        price: 85,
        prep_time: 12,
        category: "veg-chinese",
        description: "Spicy stir-fried noodles with veggies",
        image: "hakka-noodles.jpg",
        ingredients: &["Noodles", "Veggies", "Garlic", "Soy sauce"],
        popular: true,
        rating: None,
    },
    SeedItem {
        id: "schezwan-rice",
        name: "Schezwan Fried Rice",
        price: 90,
        prep_time: 13,
        category: "veg-chinese",
        description: "Rice stir-fried with Schezwan sauce",
        image: "schezwan-rice.jpg",
        ingredients: &["Rice", "Veggies", "Schezwan sauce"],
        popular: false,
        rating: None,
    },
    SeedItem {
        id: "tea",
        name: "Tea",
        price: 20,
        prep_time: 4,
        category: "beverages",
        description: "Traditional Indian chai",
        image: "tea.jpg",
        ingredients: &["Tea leaves", "Milk", "Sugar", "Ginger"],
        popular: true,
        rating: None,
    },
    SeedItem {
        id: "coffee",
        name: "Coffee",
        price: 25,
        prep_time: 5,
        category: "beverages",
        description: "Strong and creamy coffee",
        image: "coffee.jpg",
        ingredients: &["Coffee powder", "Milk", "Sugar"],
        popular: false,
        rating: None,
    },
    SeedItem {
        id: "hot-chocolate",
        name: "Hot Chocolate",
        price: 50,
        prep_time: 6,
        category: "beverages",
        description: "Rich hot chocolate drink",
        image: "hot-chocolate.jpg",
        ingredients: &["Milk", "Cocoa powder", "Sugar", "Cream"],
        popular: true,
        rating: None,
    },
];

/// Bundled categories, in menu order.
pub fn bundled_categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|c| Category {
            id: c.id.into(),
            name: c.name.to_string(),
            description: c.description.to_string(),
            image: Some(ImageRef::parse(c.image)),
            featured: c.featured,
        })
        .collect()
}

/// Bundled menu items, in menu order.
pub fn bundled_items() -> Vec<MenuItem> {
    ITEMS
        .iter()
        .map(|s| MenuItem {
            id: s.id.into(),
            name: s.name.to_string(),
            price: Money::from_rupees(s.price),
            prep_time: s.prep_time,
            category_id: s.category.into(),
            description: s.description.to_string(),
            ingredients: s.ingredients.iter().map(|i| i.to_string()).collect(),
            popular: s.popular,
            image: Some(ImageRef::parse(s.image)),
            rating: s.rating,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_IMAGE_ASSET;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_counts() {
        assert_eq!(bundled_categories().len(), 6);
        assert_eq!(bundled_items().len(), 16);
    }

    #[test]
    fn test_ids_unique_and_categories_resolve() {
        let categories: HashSet<_> = bundled_categories().into_iter().map(|c| c.id).collect();
        let items = bundled_items();
        let ids: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), items.len());
        for item in &items {
            assert!(categories.contains(&item.category_id), "{}", item.id);
        }
    }

    #[test]
    fn test_unbundled_image_falls_back() {
        let items = bundled_items();
        let khichdi = items
            .iter()
            .find(|i| i.id.as_str() == "sabudana-khichdi")
            .unwrap();
        assert_eq!(khichdi.image_or_default().as_str(), DEFAULT_IMAGE_ASSET);
    }
}
