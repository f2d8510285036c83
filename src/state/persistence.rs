use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{CookedMeal, GroceryCategory, WeeklyPlan};

/// User-tunable planning settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    pub dinners_per_week: usize,
    pub leftover_lunches: bool,
    /// Recipe categories eligible for dinner planning.
    pub plan_categories: Vec<String>,
    pub grocery_export_path: String,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            dinners_per_week: 5,
            leftover_lunches: true,
            plan_categories: vec!["Mains".to_string(), "Soups".to_string(), "Salads".to_string()],
            grocery_export_path: "Grocery List.md".to_string(),
        }
    }
}

/// Everything the planner persists between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerData {
    pub cooked_meals: Vec<CookedMeal>,
    pub weekly_plans: Vec<WeeklyPlan>,
    /// Lowercase ingredient name to store.
    pub grocery_store_assignments: HashMap<String, String>,
    /// Lowercase ingredient name to category override.
    pub ingredient_categories: HashMap<String, GroceryCategory>,
    pub settings: PlannerSettings,
}

/// Load planner data. A missing file yields defaults; missing fields are
/// filled from defaults.
pub fn load_data<P: AsRef<Path>>(path: P) -> Result<PlannerData> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no planner data file, using defaults");
        return Ok(PlannerData::default());
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save planner data as pretty JSON.
pub fn save_data<P: AsRef<Path>>(path: P, data: &PlannerData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}
