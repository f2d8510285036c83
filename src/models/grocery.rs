use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Store used when an ingredient has no assignment.
pub const DEFAULT_STORE: &str = "Any";

/// Grocery aisle category. Declaration order is the shopping order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroceryCategory {
    Produce,
    Protein,
    Dairy,
    Bakery,
    Frozen,
    Spices,
    Pantry,
    Other,
}

impl GroceryCategory {
    pub const ALL: [GroceryCategory; 8] = [
        GroceryCategory::Produce,
        GroceryCategory::Protein,
        GroceryCategory::Dairy,
        GroceryCategory::Bakery,
        GroceryCategory::Frozen,
        GroceryCategory::Spices,
        GroceryCategory::Pantry,
        GroceryCategory::Other,
    ];

    /// Sort precedence, produce first.
    pub fn order(&self) -> u8 {
        match self {
            GroceryCategory::Produce => 0,
            GroceryCategory::Protein => 1,
            GroceryCategory::Dairy => 2,
            GroceryCategory::Bakery => 3,
            GroceryCategory::Frozen => 4,
            GroceryCategory::Spices => 5,
            GroceryCategory::Pantry => 6,
            GroceryCategory::Other => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroceryCategory::Produce => "produce",
            GroceryCategory::Protein => "protein",
            GroceryCategory::Dairy => "dairy",
            GroceryCategory::Bakery => "bakery",
            GroceryCategory::Frozen => "frozen",
            GroceryCategory::Spices => "spices",
            GroceryCategory::Pantry => "pantry",
            GroceryCategory::Other => "other",
        }
    }

    /// Section heading used in exported lists.
    pub fn label(&self) -> &'static str {
        match self {
            GroceryCategory::Produce => "Produce",
            GroceryCategory::Protein => "Protein and meat",
            GroceryCategory::Dairy => "Dairy and eggs",
            GroceryCategory::Bakery => "Bakery and bread",
            GroceryCategory::Frozen => "Frozen",
            GroceryCategory::Spices => "Spices and seasoning",
            GroceryCategory::Pantry => "Pantry",
            GroceryCategory::Other => "Other",
        }
    }
}

impl fmt::Display for GroceryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroceryCategory {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        GroceryCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| PlannerError::InvalidInput(format!("Unknown grocery category: {}", s)))
    }
}

/// One consolidated line of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub category: GroceryCategory,
    pub store: String,
    /// Titles of the recipes that need this ingredient.
    pub from_recipes: Vec<String>,
    /// UI state, never touched by consolidation.
    #[serde(default)]
    pub checked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_matches_declaration() {
        let mut sorted = GroceryCategory::ALL;
        sorted.sort_by_key(|c| c.order());
        assert_eq!(sorted, GroceryCategory::ALL);
        assert!(GroceryCategory::Produce < GroceryCategory::Other);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Dairy".parse::<GroceryCategory>().unwrap(), GroceryCategory::Dairy);
        assert!("candy".parse::<GroceryCategory>().is_err());
    }
}
