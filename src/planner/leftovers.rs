use std::collections::HashMap;

use tracing::{debug, warn};

use crate::dates::add_days;
use crate::models::{MealType, PlannedMeal};
use crate::planner::constants::{DOUBLE_LEFTOVER_SERVINGS, LEFTOVER_MIN_SERVINGS};
use crate::state::RecipeLookup;

/// Leftover lunch units a dinner of `servings` yields: 0, 1, or 2.
pub fn leftover_units(servings: f64) -> usize {
    if servings >= DOUBLE_LEFTOVER_SERVINGS {
        2
    } else if servings >= LEFTOVER_MIN_SERVINGS {
        1
    } else {
        0
    }
}

fn unit_entries(dinner: &PlannedMeal, servings: f64) -> impl Iterator<Item = PlannedMeal> + '_ {
    let next_day = add_days(dinner.planned_date, 1);
    (0..leftover_units(servings)).map(move |_| PlannedMeal {
        recipe_id: dinner.recipe_id.clone(),
        planned_date: next_day,
        meal_type: MealType::Lunch,
        servings: 1.0,
        is_leftover: true,
        leftover_source_date: Some(dinner.planned_date),
    })
}

/// Collapse leftover units sharing `recipe_id|planned_date` into one entry,
/// adding their servings.
fn merge_units<I: IntoIterator<Item = PlannedMeal>>(units: I) -> Vec<PlannedMeal> {
    let mut merged: Vec<PlannedMeal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for unit in units {
        let key = format!("{}|{}", unit.recipe_id, unit.planned_date);
        match index.get(&key) {
            Some(&i) => merged[i].servings += unit.servings,
            None => {
                index.insert(key, merged.len());
                merged.push(unit);
            }
        }
    }
    merged
}

/// Leftover lunch entries for a single dinner with the given servings.
pub fn leftovers_for_dinner(dinner: &PlannedMeal, servings: f64) -> Vec<PlannedMeal> {
    merge_units(unit_entries(dinner, servings))
}

/// Order meals by date, dinners before leftovers on the same day.
pub fn sort_meals(meals: &mut [PlannedMeal]) {
    meals.sort_by(|a, b| {
        a.planned_date
            .cmp(&b.planned_date)
            .then_with(|| a.is_leftover.cmp(&b.is_leftover))
    });
}

/// Expand dinners into the full meal list with leftover lunches.
///
/// Servings come from each dinner's recipe. Dinners whose recipe cannot be
/// resolved are kept but produce no leftovers.
pub fn derive_leftovers<L>(dinners: &[PlannedMeal], lookup: &L, enabled: bool) -> Vec<PlannedMeal>
where
    L: RecipeLookup + ?Sized,
{
    let mut meals: Vec<PlannedMeal> = dinners.to_vec();

    if enabled {
        let mut units = Vec::new();
        for dinner in dinners {
            match lookup.recipe(&dinner.recipe_id) {
                Some(recipe) => units.extend(unit_entries(dinner, recipe.servings)),
                None => warn!(recipe = %dinner.recipe_id, "unknown recipe, no leftovers derived"),
            }
        }
        let leftovers = merge_units(units);
        debug!(count = leftovers.len(), "derived leftover lunches");
        meals.extend(leftovers);
    }

    sort_meals(&mut meals);
    meals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recipe;
    use chrono::NaiveDate;

    fn recipe(id: &str, servings: f64) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: id.to_string(),
            category: "Mains".to_string(),
            subcategory: String::new(),
            ingredients: Vec::new(),
            servings,
            calories_per_serving: 0.0,
            net_carbs: 0.0,
            protein: 0.0,
        }
    }

    fn day(d: u32) -> NaiveDate {
        // 2026-10-19 is a Monday
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_leftover_units() {
        assert_eq!(leftover_units(2.0), 0);
        assert_eq!(leftover_units(3.9), 0);
        assert_eq!(leftover_units(4.0), 1);
        assert_eq!(leftover_units(5.0), 1);
        assert_eq!(leftover_units(6.0), 2);
        assert_eq!(leftover_units(10.0), 2);
    }

    #[test]
    fn test_six_servings_merge_into_one_entry() {
        let recipes = vec![recipe("stew", 6.0)];
        let dinners = vec![PlannedMeal::dinner("stew", day(19), 6.0)];

        let meals = derive_leftovers(&dinners, &recipes, true);
        assert_eq!(meals.len(), 2);

        let lunch = &meals[1];
        assert!(lunch.is_leftover);
        assert_eq!(lunch.meal_type, MealType::Lunch);
        assert_eq!(lunch.planned_date, day(20));
        assert_eq!(lunch.servings, 2.0);
        assert_eq!(lunch.leftover_source_date, Some(day(19)));
    }

    #[test]
    fn test_thresholds_and_disabled() {
        let recipes = vec![recipe("small", 2.0), recipe("medium", 4.0)];
        let dinners = vec![
            PlannedMeal::dinner("small", day(19), 2.0),
            PlannedMeal::dinner("medium", day(20), 4.0),
        ];

        let meals = derive_leftovers(&dinners, &recipes, true);
        let leftovers: Vec<&PlannedMeal> = meals.iter().filter(|m| m.is_leftover).collect();
        assert_eq!(leftovers.len(), 1);
        assert_eq!(leftovers[0].recipe_id, "medium");
        assert_eq!(leftovers[0].servings, 1.0);

        let meals = derive_leftovers(&dinners, &recipes, false);
        assert_eq!(meals, dinners);
    }

    #[test]
    fn test_dinner_sorts_before_leftover_on_same_day() {
        let recipes = vec![recipe("a", 4.0), recipe("b", 4.0)];
        let dinners = vec![
            PlannedMeal::dinner("a", day(19), 4.0),
            PlannedMeal::dinner("b", day(20), 4.0),
        ];

        let meals = derive_leftovers(&dinners, &recipes, true);
        let order: Vec<(u32, bool)> = meals
            .iter()
            .map(|m| (chrono::Datelike::day(&m.planned_date), m.is_leftover))
            .collect();
        assert_eq!(order, vec![(19, false), (20, false), (20, true), (21, true)]);
    }

    #[test]
    fn test_unknown_recipe_is_skipped() {
        let recipes: Vec<Recipe> = Vec::new();
        let dinners = vec![PlannedMeal::dinner("ghost", day(19), 8.0)];
        let meals = derive_leftovers(&dinners, &recipes, true);
        assert_eq!(meals.len(), 1);
    }
}
