mod grocery;
mod plan;
mod recipe;

pub use grocery::{GroceryCategory, GroceryItem, DEFAULT_STORE};
pub use plan::{CookedMeal, MealType, PlannedMeal, RecipeStats, WeeklyPlan};
pub use recipe::{IngredientItem, IngredientSection, Recipe};
