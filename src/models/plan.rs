use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(PlannerError::InvalidInput(format!("Unknown meal type: {}", other))),
        }
    }
}

/// An entry of the cooking history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookedMeal {
    pub recipe_id: String,
    pub cooked_date: NaiveDate,
    pub meal_type: MealType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Aggregates derived from the cooking history for one recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeStats {
    pub recipe_id: String,
    pub last_cooked: Option<NaiveDate>,
    pub times_cooked: u32,
    pub days_since_last_made: Option<i64>,
}

impl RecipeStats {
    /// Stats for a recipe that has never been cooked.
    pub fn never_cooked(recipe_id: impl Into<String>) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            last_cooked: None,
            times_cooked: 0,
            days_since_last_made: None,
        }
    }
}

/// A meal placed on a calendar date.
///
/// Leftover entries carry the date of the dinner they come from; their own
/// `planned_date` is the day after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub recipe_id: String,
    pub planned_date: NaiveDate,
    pub meal_type: MealType,
    pub servings: f64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_leftover: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leftover_source_date: Option<NaiveDate>,
}

impl PlannedMeal {
    pub fn dinner(recipe_id: impl Into<String>, planned_date: NaiveDate, servings: f64) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            planned_date,
            meal_type: MealType::Dinner,
            servings,
            is_leftover: false,
            leftover_source_date: None,
        }
    }

    /// True when this entry is the given slot (date + meal type).
    pub fn occupies(&self, date: NaiveDate, meal_type: MealType) -> bool {
        self.planned_date == date && self.meal_type == meal_type
    }
}

/// The plan for one Monday-anchored week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub week_start: NaiveDate,
    pub meals: Vec<PlannedMeal>,
    pub generated_at: DateTime<Utc>,
}

impl WeeklyPlan {
    /// Cooked meals of the plan (everything that is not a leftover).
    pub fn dinners(&self) -> impl Iterator<Item = &PlannedMeal> {
        self.meals.iter().filter(|m| !m.is_leftover)
    }

    pub fn leftovers(&self) -> impl Iterator<Item = &PlannedMeal> {
        self.meals.iter().filter(|m| m.is_leftover)
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
