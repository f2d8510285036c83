use chrono::NaiveDate;
use tracing::info;

use crate::dates::monday_of;
use crate::error::{PlannerError, Result};
use crate::grocery::{CategoryLookup, StoreLookup, guess_category};
use crate::models::{
    CookedMeal, DEFAULT_STORE, GroceryCategory, MealType, PlannedMeal, RecipeStats, WeeklyPlan,
};
use crate::state::history;
use crate::state::persistence::{PlannerData, PlannerSettings};

/// Number of weekly plans kept, newest first.
pub const MAX_STORED_PLANS: usize = 12;

/// Manages cooking history, saved plans, and ingredient assignments.
pub struct PlannerStateManager {
    data: PlannerData,
}

impl PlannerStateManager {
    pub fn new(data: PlannerData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &PlannerData {
        &self.data
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.data.settings
    }

    // Cooking history

    pub fn cooked_meals(&self) -> &[CookedMeal] {
        &self.data.cooked_meals
    }

    pub fn add_cooked_meal(&mut self, meal: CookedMeal) {
        info!(recipe = %meal.recipe_id, date = %meal.cooked_date, "recorded cooked meal");
        self.data.cooked_meals.push(meal);
    }

    /// Remove every history entry for `recipe_id` on `date`. Returns how many were removed.
    pub fn remove_cooked_meal(&mut self, recipe_id: &str, date: NaiveDate) -> usize {
        let before = self.data.cooked_meals.len();
        self.data
            .cooked_meals
            .retain(|m| !(m.recipe_id == recipe_id && m.cooked_date == date));
        before - self.data.cooked_meals.len()
    }

    /// Record a planned meal as cooked on its planned date.
    pub fn mark_meal_cooked(&mut self, meal: &PlannedMeal) {
        self.add_cooked_meal(CookedMeal {
            recipe_id: meal.recipe_id.clone(),
            cooked_date: meal.planned_date,
            meal_type: meal.meal_type,
            notes: None,
        });
    }

    pub fn recipe_stats(&self, recipe_id: &str, today: NaiveDate) -> RecipeStats {
        history::recipe_stats(recipe_id, &self.data.cooked_meals, today)
    }

    pub fn is_meal_cooked(&self, meal: &PlannedMeal) -> bool {
        history::was_cooked(&self.data.cooked_meals, meal)
    }

    /// Check off (or with `cooked == false`, uncheck) the planned meal in
    /// the given slot. Checking an already logged meal adds nothing.
    pub fn set_meal_cooked(
        &mut self,
        date: NaiveDate,
        meal_type: MealType,
        cooked: bool,
    ) -> Result<PlannedMeal> {
        let meal = self
            .find_planned_meal(date, meal_type)
            .cloned()
            .ok_or_else(|| PlannerError::MealNotFound(format!("{} on {}", meal_type, date)))?;

        if !cooked {
            let removed = self.remove_cooked_meal(&meal.recipe_id, meal.planned_date);
            info!(recipe = %meal.recipe_id, date = %meal.planned_date, removed, "unchecked cooked meal");
        } else if !self.is_meal_cooked(&meal) {
            self.mark_meal_cooked(&meal);
        }
        Ok(meal)
    }

    // Weekly plans

    pub fn weekly_plans(&self) -> &[WeeklyPlan] {
        &self.data.weekly_plans
    }

    /// Plan for the week containing `date`.
    pub fn plan_for_week(&self, date: NaiveDate) -> Option<&WeeklyPlan> {
        let monday = monday_of(date);
        self.data.weekly_plans.iter().find(|p| p.week_start == monday)
    }

    /// Store a plan, replacing any plan for the same week, and keep only
    /// the most recent [`MAX_STORED_PLANS`] weeks.
    ///
    /// Fails with [`PlannerError::InvalidInput`], leaving the store unchanged,
    /// when the store is full and `plan` is older than every retained week.
    pub fn save_weekly_plan(&mut self, plan: WeeklyPlan) -> Result<()> {
        match self
            .data
            .weekly_plans
            .iter_mut()
            .find(|p| p.week_start == plan.week_start)
        {
            Some(existing) => {
                info!(week = %plan.week_start, meals = plan.meals.len(), "replacing weekly plan");
                *existing = plan;
            }
            None => {
                let full = self.data.weekly_plans.len() >= MAX_STORED_PLANS;
                let oldest = self.data.weekly_plans.iter().map(|p| p.week_start).min();
                if full && oldest.is_some_and(|oldest| plan.week_start < oldest) {
                    return Err(PlannerError::InvalidInput(format!(
                        "Week of {} is older than the {} most recent saved weeks",
                        plan.week_start, MAX_STORED_PLANS
                    )));
                }
                info!(week = %plan.week_start, meals = plan.meals.len(), "saving weekly plan");
                self.data.weekly_plans.push(plan);
            }
        }

        self.data
            .weekly_plans
            .sort_by(|a, b| b.week_start.cmp(&a.week_start));
        self.data.weekly_plans.truncate(MAX_STORED_PLANS);
        Ok(())
    }

    /// Find a meal of the week's plan by slot.
    pub fn find_planned_meal(&self, date: NaiveDate, meal_type: MealType) -> Option<&PlannedMeal> {
        self.plan_for_week(date)?
            .meals
            .iter()
            .find(|m| m.occupies(date, meal_type))
    }

    // Grocery assignments

    pub fn set_store_assignment(&mut self, ingredient: &str, store: &str) {
        self.data
            .grocery_store_assignments
            .insert(ingredient.to_lowercase(), store.to_string());
    }

    pub fn set_ingredient_category(&mut self, ingredient: &str, category: GroceryCategory) {
        self.data
            .ingredient_categories
            .insert(ingredient.to_lowercase(), category);
    }
}

impl StoreLookup for PlannerStateManager {
    fn store_for(&self, ingredient: &str) -> String {
        self.data
            .grocery_store_assignments
            .get(&ingredient.to_lowercase())
            .cloned()
            .unwrap_or_else(|| DEFAULT_STORE.to_string())
    }
}

impl CategoryLookup for PlannerStateManager {
    fn category_for(&self, ingredient: &str) -> GroceryCategory {
        self.data
            .ingredient_categories
            .get(&ingredient.to_lowercase())
            .copied()
            .unwrap_or_else(|| guess_category(ingredient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn plan(week_start: NaiveDate, meals: usize) -> WeeklyPlan {
        WeeklyPlan {
            week_start,
            meals: (0..meals)
                .map(|i| PlannedMeal::dinner(format!("r{}", i), week_start, 4.0))
                .collect(),
            generated_at: Utc::now(),
        }
    }

    fn monday(n: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap() + Duration::weeks(n)
    }

    #[test]
    fn test_save_replaces_same_week() {
        let mut manager = PlannerStateManager::new(PlannerData::default());
        manager.save_weekly_plan(plan(monday(0), 3)).unwrap();
        manager.save_weekly_plan(plan(monday(0), 5)).unwrap();
        assert_eq!(manager.weekly_plans().len(), 1);
        assert_eq!(manager.weekly_plans()[0].meals.len(), 5);
    }

    #[test]
    fn test_keeps_most_recent_twelve_weeks() {
        let mut manager = PlannerStateManager::new(PlannerData::default());
        for week in 0..15 {
            manager.save_weekly_plan(plan(monday(week), 1)).unwrap();
        }
        let plans = manager.weekly_plans();
        assert_eq!(plans.len(), MAX_STORED_PLANS);
        assert_eq!(plans[0].week_start, monday(14));
        assert_eq!(plans[MAX_STORED_PLANS - 1].week_start, monday(3));
    }

    #[test]
    fn test_rejects_week_older_than_retained_window() {
        let mut manager = PlannerStateManager::new(PlannerData::default());
        for week in 0..12 {
            manager.save_weekly_plan(plan(monday(week), 1)).unwrap();
        }

        let result = manager.save_weekly_plan(plan(monday(-10), 1));
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
        assert!(manager.plan_for_week(monday(-10)).is_none());
        assert_eq!(manager.weekly_plans().len(), MAX_STORED_PLANS);
        assert_eq!(manager.weekly_plans()[MAX_STORED_PLANS - 1].week_start, monday(0));

        // A retained week can still be replaced, and a newer one pushes out the oldest
        manager.save_weekly_plan(plan(monday(0), 3)).unwrap();
        assert_eq!(manager.plan_for_week(monday(0)).unwrap().meals.len(), 3);
        manager.save_weekly_plan(plan(monday(12), 1)).unwrap();
        assert!(manager.plan_for_week(monday(0)).is_none());
    }

    #[test]
    fn test_plan_for_week_from_any_day() {
        let mut manager = PlannerStateManager::new(PlannerData::default());
        manager.save_weekly_plan(plan(monday(2), 1)).unwrap();
        let thursday = monday(2) + Duration::days(3);
        assert!(manager.plan_for_week(thursday).is_some());
        assert!(manager.plan_for_week(monday(3)).is_none());
    }

    #[test]
    fn test_mark_cooked_and_remove() {
        let mut manager = PlannerStateManager::new(PlannerData::default());
        let meal = PlannedMeal::dinner("stew", monday(0), 6.0);
        manager.mark_meal_cooked(&meal);
        manager.mark_meal_cooked(&meal);

        let stats = manager.recipe_stats("stew", monday(0) + Duration::days(3));
        assert_eq!(stats.times_cooked, 2);
        assert_eq!(stats.days_since_last_made, Some(3));

        assert_eq!(manager.remove_cooked_meal("stew", monday(0)), 2);
        assert!(manager.cooked_meals().is_empty());
    }

    #[test]
    fn test_check_and_uncheck_planned_meal() {
        let mut manager = PlannerStateManager::new(PlannerData::default());
        let tuesday = monday(0) + Duration::days(1);
        let mut week = plan(monday(0), 1);
        week.meals.push(PlannedMeal::dinner("soup", tuesday, 2.0));
        manager.save_weekly_plan(week).unwrap();

        let meal = manager.set_meal_cooked(tuesday, MealType::Dinner, true).unwrap();
        assert_eq!(meal.recipe_id, "soup");
        assert!(manager.is_meal_cooked(&meal));

        // Checking twice logs once
        manager.set_meal_cooked(tuesday, MealType::Dinner, true).unwrap();
        assert_eq!(manager.cooked_meals().len(), 1);
        assert_eq!(manager.cooked_meals()[0].cooked_date, tuesday);

        manager.set_meal_cooked(tuesday, MealType::Dinner, false).unwrap();
        assert!(!manager.is_meal_cooked(&meal));
        assert!(manager.cooked_meals().is_empty());

        let missing = manager.set_meal_cooked(tuesday, MealType::Lunch, true);
        assert!(matches!(missing, Err(PlannerError::MealNotFound(_))));
        let no_plan = manager.set_meal_cooked(monday(5), MealType::Dinner, true);
        assert!(matches!(no_plan, Err(PlannerError::MealNotFound(_))));
    }

    #[test]
    fn test_lookups_prefer_overrides() {
        let mut manager = PlannerStateManager::new(PlannerData::default());
        assert_eq!(manager.store_for("Chicken Thighs"), DEFAULT_STORE);
        assert_eq!(manager.category_for("chicken thighs"), GroceryCategory::Protein);

        manager.set_store_assignment("Chicken Thighs", "Costco");
        manager.set_ingredient_category("Chicken Thighs", GroceryCategory::Frozen);
        assert_eq!(manager.store_for("chicken thighs"), "Costco");
        assert_eq!(manager.category_for("CHICKEN THIGHS"), GroceryCategory::Frozen);
    }
}
