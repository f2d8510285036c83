pub mod cli;
pub mod dates;
pub mod error;
pub mod grocery;
pub mod interface;
pub mod models;
pub mod parser;
pub mod planner;
pub mod seasonal;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{GroceryItem, PlannedMeal, Recipe, WeeklyPlan};
