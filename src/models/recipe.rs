use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::parser::{lenient_number, parse_ingredient_line};

/// A single ingredient line of a recipe.
///
/// `name` is the canonical key used for consolidation and seasonal matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "IngredientEntry")]
pub struct IngredientItem {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    pub name: String,
}

impl IngredientItem {
    /// Lowercase name used as the consolidation key.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Catalog files may list ingredients as raw lines or as parsed objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum IngredientEntry {
    Line(String),
    Parsed {
        #[serde(default)]
        raw: String,
        #[serde(default)]
        quantity: Option<String>,
        #[serde(default)]
        unit: Option<String>,
        name: String,
    },
}

impl From<IngredientEntry> for IngredientItem {
    fn from(entry: IngredientEntry) -> Self {
        match entry {
            IngredientEntry::Line(line) => parse_ingredient_line(&line),
            IngredientEntry::Parsed {
                raw,
                quantity,
                unit,
                name,
            } => IngredientItem {
                raw,
                quantity: quantity.filter(|q| !q.trim().is_empty()),
                unit: unit.filter(|u| !u.trim().is_empty()),
                name,
            },
        }
    }
}

/// A titled group of ingredients ("Main", "Sauce", "Sides (if applicable)").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientSection {
    pub heading: String,
    #[serde(default)]
    pub items: Vec<IngredientItem>,
}

/// A recipe as supplied by the catalog. Read-only to the planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier, usually the recipe's file path.
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub subcategory: String,

    #[serde(default)]
    pub ingredients: Vec<IngredientSection>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub servings: f64,

    #[serde(default, deserialize_with = "lenient_number")]
    pub calories_per_serving: f64,

    #[serde(default, deserialize_with = "lenient_number")]
    pub net_carbs: f64,

    #[serde(default, deserialize_with = "lenient_number")]
    pub protein: f64,
}

impl Recipe {
    /// All ingredient items across every section.
    pub fn items(&self) -> impl Iterator<Item = &IngredientItem> {
        self.ingredients.iter().flat_map(|s| s.items.iter())
    }

    /// Ingredient display names in recipe order.
    pub fn ingredient_names(&self) -> Vec<String> {
        self.items().map(|i| i.name.clone()).collect()
    }

    /// Set of lowercase ingredient names.
    pub fn ingredient_keys(&self) -> HashSet<String> {
        self.items().map(IngredientItem::key).collect()
    }

    /// Key for the diversity cap: subcategory, falling back to category.
    pub fn diversity_key(&self) -> &str {
        if self.subcategory.is_empty() {
            &self.category
        } else {
            &self.subcategory
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mixed_ingredient_shapes() {
        let json = r#"{
            "id": "Recipes/Mains/Chicken/Tacos.md",
            "title": "Chicken Tacos",
            "servings": "4–6",
            "protein": "32g",
            "ingredients": [
                {"heading": "Main", "items": [
                    "1 lb chicken thighs, trimmed",
                    {"quantity": "2", "unit": "", "name": "limes"}
                ]}
            ]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.servings, 5.0);
        assert_eq!(recipe.protein, 32.0);
        assert_eq!(recipe.net_carbs, 0.0);

        let items: Vec<&IngredientItem> = recipe.items().collect();
        assert_eq!(items[0].name, "chicken thighs");
        assert_eq!(items[0].unit.as_deref(), Some("lb"));
        assert_eq!(items[1].name, "limes");
        assert!(items[1].unit.is_none());
    }

    #[test]
    fn test_diversity_key_fallback() {
        let mut recipe: Recipe =
            serde_json::from_str(r#"{"id": "a", "title": "A", "category": "Soups"}"#).unwrap();
        assert_eq!(recipe.diversity_key(), "Soups");
        recipe.subcategory = "Bean".to_string();
        assert_eq!(recipe.diversity_key(), "Bean");
    }

    #[test]
    fn test_ingredient_keys_lowercase() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": "a", "title": "A", "ingredients": [{"heading": "Main", "items": ["Garlic", "garlic"]}]}"#,
        )
        .unwrap();
        assert_eq!(recipe.ingredient_keys().len(), 1);
    }
}
