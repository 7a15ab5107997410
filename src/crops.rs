// src/crops.rs

use crate::filters::{contains_ignore_case, normalize_query};

/// Crops offered by the booking form's picker, alphabetical.
pub const CROP_CATALOG: [&str; 44] = [
    "Arecanut", "Bajra", "Banana", "Barley", "Black Pepper",
    "Brinjal", "Cabbage", "Cardamom", "Cashew Nut", "Castor seed",
    "Cauliflower", "Chilli", "Coconut", "Coffee", "Cotton",
    "Cucumber", "Garlic", "Ginger", "Gram", "Grapes",
    "Groundnut", "Jowar", "Jute", "Lentil", "Maize",
    "Mango", "Mustard", "Onion", "Orange", "Paddy",
    "Pea", "Potato", "Ragi", "Rapeseed", "Rice",
    "Rubber", "Safflower", "Soyabean", "Sugarcane", "Sunflower",
    "Tea", "Tomato", "Turmeric", "Wheat",
];

pub const DEFAULT_CROP: &str = "Bajra";

pub fn search_crops(query: &str) -> Vec<&'static str> {
    match normalize_query(query) {
        None => CROP_CATALOG.to_vec(),
        Some(needle) => CROP_CATALOG
            .into_iter()
            .filter(|crop| contains_ignore_case([*crop], &needle))
            .collect(),
    }
}
