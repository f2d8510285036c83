use std::collections::HashMap;

use chrono::NaiveDate;

use crate::dates::days_between;
use crate::models::{CookedMeal, PlannedMeal, RecipeStats};

/// Compute cooking stats for one recipe from the history log.
///
/// `days_since_last_made` counts whole calendar days from the latest cooked
/// date to `today`.
pub fn recipe_stats(recipe_id: &str, history: &[CookedMeal], today: NaiveDate) -> RecipeStats {
    let (times_cooked, last_cooked) = history
        .iter()
        .filter(|m| m.recipe_id == recipe_id)
        .fold((0u32, None::<NaiveDate>), |(count, latest), m| {
            (count + 1, latest.max(Some(m.cooked_date)))
        });

    RecipeStats {
        recipe_id: recipe_id.to_string(),
        last_cooked,
        times_cooked,
        days_since_last_made: last_cooked.map(|d| days_between(d, today)),
    }
}

/// Whether the history logs `meal`'s recipe on its planned date.
pub fn was_cooked(history: &[CookedMeal], meal: &PlannedMeal) -> bool {
    history
        .iter()
        .any(|m| m.recipe_id == meal.recipe_id && m.cooked_date == meal.planned_date)
}

/// Stats for many recipes keyed by recipe id.
pub fn all_recipe_stats<'a, I>(
    recipe_ids: I,
    history: &[CookedMeal],
    today: NaiveDate,
) -> HashMap<String, RecipeStats>
where
    I: IntoIterator<Item = &'a str>,
{
    recipe_ids
        .into_iter()
        .map(|id| (id.to_string(), recipe_stats(id, history, today)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    fn cooked(id: &str, date: &str) -> CookedMeal {
        CookedMeal {
            recipe_id: id.to_string(),
            cooked_date: date.parse().unwrap(),
            meal_type: MealType::Dinner,
            notes: None,
        }
    }

    #[test]
    fn test_never_cooked() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let stats = recipe_stats("a", &[cooked("b", "2026-10-01")], today);
        assert_eq!(stats, RecipeStats::never_cooked("a"));
    }

    #[test]
    fn test_latest_date_wins_regardless_of_order() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let history = vec![
            cooked("a", "2026-10-09"),
            cooked("a", "2026-08-01"),
            cooked("b", "2026-10-18"),
            cooked("a", "2026-09-15"),
        ];
        let stats = recipe_stats("a", &history, today);
        assert_eq!(stats.times_cooked, 3);
        assert_eq!(stats.last_cooked, NaiveDate::from_ymd_opt(2026, 10, 9));
        assert_eq!(stats.days_since_last_made, Some(10));
    }

    #[test]
    fn test_was_cooked_matches_recipe_and_date() {
        let history = vec![cooked("a", "2026-10-19")];
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert!(was_cooked(&history, &PlannedMeal::dinner("a", date, 4.0)));
        assert!(!was_cooked(&history, &PlannedMeal::dinner("b", date, 4.0)));
        assert!(!was_cooked(&history, &PlannedMeal::dinner("a", date.succ_opt().unwrap(), 4.0)));
    }

    #[test]
    fn test_all_recipe_stats() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let history = vec![cooked("a", "2026-10-19")];
        let stats = all_recipe_stats(["a", "b"], &history, today);
        assert_eq!(stats["a"].days_since_last_made, Some(0));
        assert_eq!(stats["b"].times_cooked, 0);
    }
}
