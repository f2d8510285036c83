pub mod prompts;
pub mod render;

pub use prompts::{pick_recipe, prompt_yes_no};
pub use render::{display_grocery_list, display_recipe_stats, display_season, display_weekly_plan};
