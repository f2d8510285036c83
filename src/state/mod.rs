mod catalog;
mod history;
mod manager;
mod persistence;

pub use catalog::{RecipeCatalog, RecipeLookup, load_recipes};
pub use history::{all_recipe_stats, recipe_stats, was_cooked};
pub use manager::{MAX_STORED_PLANS, PlannerStateManager};
pub use persistence::{PlannerData, PlannerSettings, load_data, save_data};
