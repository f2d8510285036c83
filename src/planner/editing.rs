use chrono::NaiveDate;
use tracing::info;

use crate::error::{PlannerError, Result};
use crate::models::{MealType, PlannedMeal, Recipe, WeeklyPlan};
use crate::planner::leftovers::{leftovers_for_dinner, sort_meals};

fn slot_index(plan: &WeeklyPlan, date: NaiveDate, meal_type: MealType) -> Result<usize> {
    plan.meals
        .iter()
        .position(|m| m.occupies(date, meal_type))
        .ok_or_else(|| PlannerError::MealNotFound(format!("{} on {}", meal_type, date)))
}

fn drop_leftovers_of(plan: &mut WeeklyPlan, recipe_id: &str, dinner_date: NaiveDate) {
    plan.meals.retain(|m| {
        !(m.is_leftover
            && m.recipe_id == recipe_id
            && m.leftover_source_date == Some(dinner_date))
    });
}

/// Put `recipe` in the slot at `date`/`meal_type`.
///
/// Swapping a dinner regenerates its leftover lunch from the new recipe's
/// servings.
pub fn swap_recipe(
    plan: &mut WeeklyPlan,
    date: NaiveDate,
    meal_type: MealType,
    recipe: &Recipe,
    leftovers_enabled: bool,
) -> Result<()> {
    let i = slot_index(plan, date, meal_type)?;
    let old_id = std::mem::replace(&mut plan.meals[i].recipe_id, recipe.id.clone());
    plan.meals[i].servings = recipe.servings;

    let meal = plan.meals[i].clone();
    if meal.meal_type == MealType::Dinner && !meal.is_leftover {
        drop_leftovers_of(plan, &old_id, date);
        if leftovers_enabled {
            plan.meals.extend(leftovers_for_dinner(&meal, recipe.servings));
        }
    }

    sort_meals(&mut plan.meals);
    info!(date = %date, meal = %meal_type, from = %old_id, to = %recipe.id, "swapped meal");
    Ok(())
}

/// Remove the meal in a slot. Removing a dinner also removes its leftovers.
pub fn remove_meal(plan: &mut WeeklyPlan, date: NaiveDate, meal_type: MealType) -> Result<PlannedMeal> {
    let i = slot_index(plan, date, meal_type)?;
    let removed = plan.meals.remove(i);

    if !removed.is_leftover {
        drop_leftovers_of(plan, &removed.recipe_id, date);
    }

    info!(date = %date, meal = %meal_type, recipe = %removed.recipe_id, "removed meal");
    Ok(removed)
}

/// Empty the week's meal list.
pub fn clear_plan(plan: &mut WeeklyPlan) {
    info!(week = %plan.week_start, meals = plan.meals.len(), "cleared plan");
    plan.meals.clear();
}
