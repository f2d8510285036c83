use crate::models::{DEFAULT_STORE, GroceryCategory};

/// Resolves an ingredient name to a grocery category.
pub trait CategoryLookup {
    fn category_for(&self, ingredient: &str) -> GroceryCategory;
}

/// Resolves an ingredient name to the store it is bought at.
pub trait StoreLookup {
    fn store_for(&self, ingredient: &str) -> String;
}

const PRODUCE: &[&str] = &[
    "avocado", "tomato", "onion", "garlic", "cilantro", "lime", "lemon", "pepper", "lettuce",
    "spinach", "broccoli", "carrot", "celery", "cucumber", "jalapeño", "ginger", "basil",
    "rosemary", "thyme", "parsley", "scallion", "cherry tomato", "red onion", "green onion",
    "bell pepper", "zucchini", "squash", "potato", "sweet potato", "mushroom", "corn", "cabbage",
    "kale",
];

const PROTEIN: &[&str] = &[
    "chicken", "beef", "pork", "shrimp", "salmon", "fish", "turkey", "sausage", "bacon",
    "tenderloin", "ground", "steak", "roast",
];

const DAIRY: &[&str] = &[
    "cheese", "cream cheese", "milk", "butter", "yogurt", "sour cream", "cream", "cheddar",
    "mozzarella", "parmesan", "feta", "cottage cheese", "egg",
];

const SPICES: &[&str] = &[
    "salt", "pepper", "cumin", "paprika", "chili powder", "oregano", "cinnamon", "nutmeg",
    "cayenne", "turmeric", "garlic powder", "onion powder",
];

const BAKERY: &[&str] = &["tortilla", "bread", "bun", "roll", "pita", "naan", "wrap"];

const FROZEN: &[&str] = &["frozen"];

/// Keyword heuristic for ingredients without an explicit category.
///
/// Lists are checked in a fixed order by substring, so "black pepper" is
/// produce and "garlic powder" is produce too. Unknown names are pantry.
pub fn guess_category(name: &str) -> GroceryCategory {
    let lower = name.to_lowercase();
    let rules: [(&[&str], GroceryCategory); 6] = [
        (PRODUCE, GroceryCategory::Produce),
        (PROTEIN, GroceryCategory::Protein),
        (DAIRY, GroceryCategory::Dairy),
        (SPICES, GroceryCategory::Spices),
        (BAKERY, GroceryCategory::Bakery),
        (FROZEN, GroceryCategory::Frozen),
    ];

    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, category)| *category)
        .unwrap_or(GroceryCategory::Pantry)
}

/// Lookups with no overrides: heuristic categories, every store "Any".
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicLookup;

impl CategoryLookup for HeuristicLookup {
    fn category_for(&self, ingredient: &str) -> GroceryCategory {
        guess_category(ingredient)
    }
}

impl StoreLookup for HeuristicLookup {
    fn store_for(&self, _ingredient: &str) -> String {
        DEFAULT_STORE.to_string()
    }
}
