pub mod constants;
pub mod editing;
pub mod leftovers;
pub mod scoring;
pub mod selection;

pub use constants::*;
pub use editing::{clear_plan, remove_meal, swap_recipe};
pub use leftovers::{derive_leftovers, leftover_units, leftovers_for_dinner, sort_meals};
pub use scoring::{ScoreReason, ScoreRule, ScoredRecipe, score_recipe};
pub use selection::{
    PlanOutcome, PlanRequest, generate_weekly_plan, ingredient_overlap, optimize_order,
    select_dinners, select_recipes,
};
